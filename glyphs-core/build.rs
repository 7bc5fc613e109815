use std::collections::HashSet;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

static DATA_FILE: &str = "data/glyphs.txt";

fn style_bits(styles: &str, line: usize) -> u8 {
    let mut bits = 0u8;
    for c in styles.chars() {
        bits |= match c {
            'b' => 0b001,
            'r' => 0b010,
            's' => 0b100,
            other => panic!("{}:{}: unknown style `{}`", DATA_FILE, line, other),
        };
    }
    assert!(bits != 0, "{}:{}: glyph has no styles", DATA_FILE, line);
    bits
}

fn main() {
    println!("cargo:rerun-if-changed={}", DATA_FILE);

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    let lines = BufReader::new(File::open(DATA_FILE).unwrap()).lines();
    for (index, line_result) in lines.enumerate() {
        let line = line_result.unwrap();
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let number = index + 1;
        let parts = line.split(';').collect::<Vec<_>>();
        assert_eq!(
            parts.len(),
            3,
            "{}:{}: expected `name;styles;codepoint`",
            DATA_FILE,
            number
        );

        let name = parts[0];
        assert!(
            !name.is_empty() && !name.contains(char::is_whitespace),
            "{}:{}: invalid glyph name `{}`",
            DATA_FILE,
            number,
            name
        );
        assert!(
            seen.insert(name.to_owned()),
            "{}:{}: duplicate glyph `{}`",
            DATA_FILE,
            number,
            name
        );

        let c32 = u32::from_str_radix(parts[2], 16).unwrap();
        let c = std::char::from_u32(c32)
            .unwrap_or_else(|| panic!("{}:{}: invalid code point", DATA_FILE, number));

        entries.push((
            name.to_owned(),
            format!(
                "RawGlyph {{ code_point: '\\u{{{:x}}}', styles: {} }}",
                c as u32,
                style_bits(parts[1], number)
            ),
        ));
    }

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("glyph_table.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    let mut map_builder = phf_codegen::Map::new();
    for (name, value) in &entries {
        map_builder.entry(name.as_str(), value.as_str());
    }
    writeln!(
        &mut file,
        "static GLYPH_TABLE: phf::Map<&'static str, RawGlyph> = {};",
        map_builder.build()
    )
    .unwrap();
}
