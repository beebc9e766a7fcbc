use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

const DISPLAY_NAME_KEY: &str = "DisplayName";

/// Request to find a user by their display name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LookupCommand {
    /// Empty when the body carries no `DisplayName`.
    pub display_name: String,
}

impl LookupCommand {
    /// Decodes the first JSON value in `body`; anything after it is ignored.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD before parsing, so a mangled
    /// name still decodes.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        let body = String::from_utf8_lossy(body);
        let mut deserializer = serde_json::Deserializer::from_str(&body);
        LookupCommand::deserialize(&mut deserializer)
    }
}

// The value must be a JSON object. Keys are matched against `DisplayName`
// ignoring ASCII case, in document order, so the last matching key wins.
// A `null` value leaves the name as it was. Unknown values are skipped with
// `IgnoredAny`, which walks nesting iteratively and so has no depth limit.
impl<'de> Deserialize<'de> for LookupCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LookupCommandVisitor)
    }
}

struct LookupCommandVisitor;

impl<'de> Visitor<'de> for LookupCommandVisitor {
    type Value = LookupCommand;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut command = LookupCommand::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(DISPLAY_NAME_KEY) {
                if let Some(display_name) = map.next_value::<Option<String>>()? {
                    command.display_name = display_name;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(command)
    }
}
