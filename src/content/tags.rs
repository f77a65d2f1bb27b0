//! Technology tags shown on project cards.

use serde::Serialize;

/// A technology badge with its brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Display name
    pub name: &'static str,
    /// Brand color as `(r, g, b)`
    pub color: (u8, u8, u8),
}

impl Tag {
    const fn new(name: &'static str, hex: u32) -> Self {
        Self {
            name,
            color: (
                ((hex >> 16) & 0xff) as u8,
                ((hex >> 8) & 0xff) as u8,
                (hex & 0xff) as u8,
            ),
        }
    }

    /// Color as `#rrggbb`.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.color;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

pub const ANGULAR: Tag = Tag::new("Angular", 0xDD_0031);
pub const APOLLO: Tag = Tag::new("Apollo", 0x31_1C87);
pub const AWS: Tag = Tag::new("AWS", 0xFF_9900);
pub const BOOTSTRAP: Tag = Tag::new("Bootstrap", 0x79_52B3);
pub const CSHARP: Tag = Tag::new("C#", 0x68_217A);
pub const CSS: Tag = Tag::new("CSS", 0x15_72B6);
pub const DGRAPH: Tag = Tag::new("Dgraph", 0xE5_0695);
pub const DOTNET: Tag = Tag::new(".NET Core", 0x51_2BD4);
pub const FIGMA: Tag = Tag::new("Figma", 0xF2_4E1E);
pub const FIREBASE: Tag = Tag::new("Firebase", 0xFF_CA28);
pub const GRAPHQL: Tag = Tag::new("GraphQL", 0xE1_0098);
pub const HTML: Tag = Tag::new("HTML", 0xE3_4F26);
pub const JAVA: Tag = Tag::new("Java", 0xED_8B00);
pub const JAVASCRIPT: Tag = Tag::new("JavaScript", 0xF7_DF1E);
pub const LIBGDX: Tag = Tag::new("libGDX", 0xE7_4A45);
pub const MATERIAL_UI: Tag = Tag::new("Material UI", 0x00_7FFF);
pub const MATHEMATICA: Tag = Tag::new("Mathematica", 0xDD_1100);
pub const MONGODB: Tag = Tag::new("MongoDB", 0x47_A248);
pub const MYSQL: Tag = Tag::new("MySQL", 0x44_79A1);
pub const NODE: Tag = Tag::new("Node.js", 0x33_9933);
pub const PHP: Tag = Tag::new("PHP", 0x77_7BB4);
pub const REACT: Tag = Tag::new("React", 0x61_DAFB);
pub const REACT_NATIVE: Tag = Tag::new("React Native", 0x61_DAFB);
pub const REDUX: Tag = Tag::new("Redux", 0x76_4ABC);
pub const SQL_SERVER: Tag = Tag::new("SQL Server", 0xCC_2927);
pub const TYPESCRIPT: Tag = Tag::new("TypeScript", 0x31_78C6);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(REACT.color, (0x61, 0xDA, 0xFB));
        assert_eq!(REACT.hex(), "#61dafb");
    }
}
