//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small ANSI layout with one circumflex dead key.
///
/// Keys: A (code 0, via action "a"), 1 (code 18), the circumflex dead key
/// (code 33, `[` position), space (code 49, via action "space") and
/// backspace (code 51, no Windows row).
///
/// Keymaps: 0 default, 1 shift, 2 caps, 3 option, 4 shift+option, 5 command.
pub const CIRCUMFLEX_LAYOUT: &str = r#"<?xml version="1.1" encoding="UTF-8"?>
<!DOCTYPE keyboard SYSTEM "file://localhost/System/Library/DTDs/KeyboardLayout.dtd">
<!--Last edited by Ukelele version 3.5.0 -->
<keyboard group="126" id="-4242" name="Circumflex Test" maxout="1">
    <layouts>
        <layout first="0" last="17" modifiers="Modifiers" mapSet="ANSI"/>
    </layouts>
    <modifierMap id="Modifiers" defaultIndex="0">
        <keyMapSelect mapIndex="0">
            <modifier keys=""/>
        </keyMapSelect>
        <keyMapSelect mapIndex="1">
            <modifier keys="anyShift caps?"/>
        </keyMapSelect>
        <keyMapSelect mapIndex="2">
            <modifier keys="caps"/>
        </keyMapSelect>
        <keyMapSelect mapIndex="3">
            <modifier keys="anyOption"/>
        </keyMapSelect>
        <keyMapSelect mapIndex="4">
            <modifier keys="anyShift anyOption caps?"/>
        </keyMapSelect>
        <keyMapSelect mapIndex="5">
            <modifier keys="command caps? anyShift? anyOption?"/>
        </keyMapSelect>
    </modifierMap>
    <keyMapSet id="ANSI">
        <keyMap index="0">
            <key code="0" action="a"/>
            <key code="18" output="1"/>
            <key code="33" action="circ"/>
            <key code="49" action="space"/>
            <key code="51" output="&#x0008;"/>
        </keyMap>
        <keyMap index="1">
            <key code="0" output="A"/>
            <key code="18" output="!"/>
            <key code="33" output="{"/>
            <key code="49" output=" "/>
        </keyMap>
        <keyMap index="2">
            <key code="0" output="A"/>
            <key code="18" output="1"/>
            <key code="33" action="circ"/>
            <key code="49" action="space"/>
        </keyMap>
        <keyMap index="3">
            <key code="0" output="&#x00E5;"/>
            <key code="18" output="&#x00A1;"/>
            <key code="33" output="&#x201C;"/>
            <key code="49" output="&#x00A0;"/>
        </keyMap>
        <keyMap index="4">
            <key code="0" output="&#x00C5;"/>
            <key code="18" output="&#x2044;"/>
            <key code="33" output="&#x201D;"/>
            <key code="49" output="&#x00A0;"/>
        </keyMap>
        <keyMap index="5">
            <key code="0" output="a"/>
            <key code="18" output="1"/>
            <key code="33" output="["/>
            <key code="49" output=" "/>
        </keyMap>
    </keyMapSet>
    <actions>
        <action id="a">
            <when state="none" output="a"/>
            <when state="s1" output="&#x00E2;"/>
        </action>
        <action id="circ">
            <when state="none" next="s1"/>
        </action>
        <action id="space">
            <when state="none" output=" "/>
            <when state="s1" output="&#x0302;"/>
        </action>
    </actions>
    <terminators>
        <when state="s1" output="^"/>
    </terminators>
</keyboard>
"#;

/// A layout whose caps lock state types Greek, plus one ligature output.
pub const GREEK_CAPS_LAYOUT: &str = r#"<?xml version="1.1" encoding="UTF-8"?>
<keyboard group="126" id="-4243" name="Greek Caps">
    <modifierMap id="Modifiers" defaultIndex="0">
        <keyMapSelect mapIndex="0">
            <modifier keys=""/>
        </keyMapSelect>
        <keyMapSelect mapIndex="1">
            <modifier keys="anyShift"/>
        </keyMapSelect>
        <keyMapSelect mapIndex="2">
            <modifier keys="caps"/>
        </keyMapSelect>
        <keyMapSelect mapIndex="3">
            <modifier keys="anyShift caps"/>
        </keyMapSelect>
    </modifierMap>
    <keyMapSet id="ANSI">
        <keyMap index="0">
            <key code="0" output="a"/>
            <key code="1" output="&#x0066;&#x0069;"/>
        </keyMap>
        <keyMap index="1">
            <key code="0" output="A"/>
        </keyMap>
        <keyMap index="2">
            <key code="0" output="&#x03B1;"/>
        </keyMap>
        <keyMap index="3">
            <key code="0" output="&#x0391;"/>
        </keyMap>
    </keyMapSet>
    <keyMapSet id="JIS">
        <keyMap index="0">
            <key code="93" output="&#x00A5;"/>
        </keyMap>
    </keyMapSet>
</keyboard>
"#;

/// Writes `content` to `<temp>/<file_name>` and returns the path with its guard.
pub fn create_temp_keylayout(file_name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write keylayout file");
    (path, temp_dir)
}

/// Path of a config file inside `dir` (not created).
pub fn temp_config_path(dir: &Path) -> PathBuf {
    dir.join("config").join("config.toml")
}

/// Reads a KLC file, checking its BOM and decoding UTF-16 LE.
pub fn read_klc(path: &Path) -> String {
    let bytes = fs::read(path).expect("Failed to read KLC file");
    assert_eq!(&bytes[..2], &[0xFF, 0xFE], "KLC file must start with a UTF-16 LE BOM");
    let units: Vec<u16> = bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).expect("KLC file must be valid UTF-16")
}

/// Splits KLC text on CRLF, dropping the empty piece after the final CRLF.
pub fn klc_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split("\r\n").collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
