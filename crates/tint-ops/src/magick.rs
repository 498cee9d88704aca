//! Translator for a constrained subset of ImageMagick convert options.
//!
//! Legacy color recipes are often written as `convert` command lines.
//! [`magick_to_ops`] maps the subset that has an equivalent here
//! (`-channel`, `+channel`, `-sigmoidal-contrast`, `-gamma`, `-modulate`)
//! into an operation string for [`crate::parse_operations`].
//!
//! The scan is left-to-right and carries one piece of state: the current
//! channel selector, which defaults to RGB and is reset by `+channel`.

/// Option flag waiting for its argument token.
#[derive(Clone, Copy)]
enum Pending {
    None,
    Channel,
    Sigmoidal,
    Gamma,
    Modulate,
}

/// Translates ImageMagick convert options into an operation string.
///
/// Unrecognized flags are skipped; percentages (ImageMagick's bias and
/// modulate conventions) are converted to [0, 1] proportions at this
/// boundary, so the emitted operation string only ever carries plain
/// ratios.
///
/// # Example
///
/// ```rust
/// use tint_ops::magick_to_ops;
///
/// let ops = magick_to_ops("-channel B -gamma 0.95 +channel -modulate 100,125");
/// assert_eq!(ops, "gamma B 0.95 saturation 1.25");
/// ```
pub fn magick_to_ops(convert_opts: &str) -> String {
    let mut ops: Vec<String> = Vec::new();
    let mut bands = String::from("RGB");
    let mut pending = Pending::None;

    for part in convert_opts.split_whitespace() {
        match part {
            "-channel" => {
                pending = Pending::Channel;
                continue;
            }
            "+channel" => {
                bands = String::from("RGB");
                pending = Pending::None;
                continue;
            }
            "-sigmoidal-contrast" => {
                pending = Pending::Sigmoidal;
                continue;
            }
            "-gamma" => {
                pending = Pending::Gamma;
                continue;
            }
            "-modulate" => {
                pending = Pending::Modulate;
                continue;
            }
            _ => {}
        }

        match pending {
            Pending::Channel => bands = part.to_ascii_uppercase(),
            Pending::Sigmoidal => {
                if let Some(op) = sigmoidal_op(&bands, part) {
                    ops.push(op);
                }
            }
            Pending::Gamma => ops.push(format!("gamma {bands} {part}")),
            Pending::Modulate => {
                if let Some(op) = modulate_op(part) {
                    ops.push(op);
                }
            }
            Pending::None => {}
        }
        pending = Pending::None;
    }

    ops.join(" ")
}

/// Builds a sigmoidal clause from a `CONTRAST[,BIAS%]` argument.
///
/// The bias defaults to 0.5; an explicit bias is a percentage and is
/// divided by 100.
fn sigmoidal_op(bands: &str, arg: &str) -> Option<String> {
    let fields: Vec<&str> = split_fields(arg);
    let contrast = fields.first()?;
    let bias = match fields.get(1) {
        Some(token) => {
            let cleaned = token.replace('%', "");
            match cleaned.parse::<f32>() {
                Ok(v) => (v / 100.0).to_string(),
                // let the downstream parser reject it
                Err(_) => cleaned,
            }
        }
        None => String::from("0.5"),
    };
    Some(format!("sigmoidal {bands} {contrast} {bias}"))
}

/// Builds a saturation clause from a `LIGHTNESS,SATURATION[,HUE]`
/// argument; only the saturation field is used.
fn modulate_op(arg: &str) -> Option<String> {
    let fields: Vec<&str> = split_fields(arg);
    let saturation = fields.get(1)?.replace('%', "");
    let proportion = saturation.parse::<f32>().ok()? / 100.0;
    Some(format!("saturation {proportion}"))
}

/// ImageMagick joins argument fields with `,` or `x`.
fn split_fields(arg: &str) -> Vec<&str> {
    arg.split(|c| c == ',' || c == 'x')
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magick_to_ops() {
        let ops = magick_to_ops(
            "-channel B -sigmoidal-contrast 4 -gamma 0.95 \
             -channel r -gamma 1.10 \
             -channel rgb -sigmoidal-contrast 1x55% \
             -channel G -gamma 0.9 \
             -modulate 100,125 \
             +channel -sigmoidal-contrast 3,40% \
             -modulate 222,135 ",
        );

        assert_eq!(
            ops,
            [
                "sigmoidal B 4 0.5",
                "gamma B 0.95",
                "gamma R 1.10",
                "sigmoidal RGB 1 0.55",
                "gamma G 0.9",
                "saturation 1.25",
                "sigmoidal RGB 3 0.4",
                "saturation 1.35",
            ]
            .join(" ")
        );
    }

    #[test]
    fn test_channel_defaults_to_rgb() {
        assert_eq!(magick_to_ops("-gamma 1.05"), "gamma RGB 1.05");
    }

    #[test]
    fn test_plus_channel_resets() {
        let ops = magick_to_ops("-channel B -gamma 0.9 +channel -gamma 1.1");
        assert_eq!(ops, "gamma B 0.9 gamma RGB 1.1");
    }

    #[test]
    fn test_unknown_flags_skipped() {
        let ops = magick_to_ops("-resize 50% -gamma 1.05 -strip");
        assert_eq!(ops, "gamma RGB 1.05");
    }

    #[test]
    fn test_output_parses() {
        let ops = magick_to_ops("-sigmoidal-contrast 3,50% -modulate 100,110");
        assert!(crate::parse_operations(&ops).is_ok());
    }
}
