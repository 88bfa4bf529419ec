use serde::{Deserialize, Deserializer, de::Error};

/// Accepts a number between 0 and 1 or a percentage string such as `"60%"`.
pub fn de_opacity<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let opacity = match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(opacity) => opacity,

        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix('%') else {
                return Err(D::Error::custom("expected string to end with '%'"));
            };

            match string.trim().parse::<f32>() {
                Ok(percent) => percent / 100.,
                Err(_) => return Err(D::Error::custom("could not convert string into a percentage")),
            }
        }
    };

    if !(0. ..=1.).contains(&opacity) {
        return Err(D::Error::custom("opacity must be between 0 and 1"));
    }

    Ok(opacity)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
