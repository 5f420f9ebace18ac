use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("key_codes.rs");
    let mut f = File::create(&dest_path).expect("create key_codes.rs");

    // Generate the KeyCode newtype wrapper
    writeln!(
        f,
        r#"
/// A browser keyboard keycode (`KeyboardEvent.keyCode`).
///
/// This is a newtype wrapper around u16 for type safety.
/// The numeric values are the legacy DOM keycodes, e.g. 65 for `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KeyCode(pub u16);

impl KeyCode {{
    /// Get the raw numeric code value
    pub fn code(self) -> u16 {{
        self.0
    }}

    /// Built-in protocol name of this keycode, if it has one
    pub fn name(self) -> Option<&'static str> {{
        key_name(self.0)
    }}
}}

impl From<u16> for KeyCode {{
    fn from(code: u16) -> Self {{
        KeyCode(code)
    }}
}}

impl From<KeyCode> for u16 {{
    fn from(code: KeyCode) -> Self {{
        code.0
    }}
}}

impl fmt::Display for KeyCode {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        match self.name() {{
            Some(name) => write!(f, "{{}}", name),
            None => write!(f, "{{}}", self.0),
        }}
    }}
}}

impl FromStr for KeyCode {{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        if let Ok(code) = s.parse::<u16>() {{
            return Ok(KeyCode(code));
        }}
        key_from_name(s).ok_or_else(|| format!("Unknown key: {{}}", s))
    }}
}}
"#
    )
    .expect("write key_codes.rs");

    println!("cargo:rerun-if-changed=build.rs");
}
