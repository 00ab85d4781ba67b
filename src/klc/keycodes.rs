//! Windows scan codes, virtual keys and their macOS counterparts.
//!
//! The key table of a KLC file covers the character-producing keys only.
//! Each entry carries the macOS virtual key code found at the same physical
//! position on an ANSI/ISO keyboard.

/// One character-producing key of a Windows keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsKey {
    /// Hardware scan code
    pub scancode: u8,
    /// Virtual key name without the `VK_` prefix
    pub virtual_key: &'static str,
    /// macOS key code at the same position, if there is one
    pub mac_key_code: Option<u16>,
}

const fn key(scancode: u8, virtual_key: &'static str, mac_key_code: u16) -> WindowsKey {
    WindowsKey {
        scancode,
        virtual_key,
        mac_key_code: Some(mac_key_code),
    }
}

/// Character-producing keys, sorted by scan code.
pub const WINDOWS_KEYS: &[WindowsKey] = &[
    key(0x02, "1", 18),
    key(0x03, "2", 19),
    key(0x04, "3", 20),
    key(0x05, "4", 21),
    key(0x06, "5", 23),
    key(0x07, "6", 22),
    key(0x08, "7", 26),
    key(0x09, "8", 28),
    key(0x0a, "9", 25),
    key(0x0b, "0", 29),
    key(0x0c, "OEM_MINUS", 27),
    key(0x0d, "OEM_PLUS", 24),
    key(0x10, "Q", 12),
    key(0x11, "W", 13),
    key(0x12, "E", 14),
    key(0x13, "R", 15),
    key(0x14, "T", 17),
    key(0x15, "Y", 16),
    key(0x16, "U", 32),
    key(0x17, "I", 34),
    key(0x18, "O", 31),
    key(0x19, "P", 35),
    key(0x1a, "OEM_4", 33),
    key(0x1b, "OEM_6", 30),
    key(0x1e, "A", 0),
    key(0x1f, "S", 1),
    key(0x20, "D", 2),
    key(0x21, "F", 3),
    key(0x22, "G", 5),
    key(0x23, "H", 4),
    key(0x24, "J", 38),
    key(0x25, "K", 40),
    key(0x26, "L", 37),
    key(0x27, "OEM_1", 41),
    key(0x28, "OEM_7", 39),
    key(0x29, "OEM_3", 50),
    key(0x2b, "OEM_5", 42),
    key(0x2c, "Z", 6),
    key(0x2d, "X", 7),
    key(0x2e, "C", 8),
    key(0x2f, "V", 9),
    key(0x30, "B", 11),
    key(0x31, "N", 45),
    key(0x32, "M", 46),
    key(0x33, "OEM_COMMA", 43),
    key(0x34, "OEM_PERIOD", 47),
    key(0x35, "OEM_2", 44),
    key(0x39, "SPACE", 49),
    key(0x53, "DECIMAL", 65),
    key(0x56, "OEM_102", 10),
    WindowsKey {
        scancode: 0x73,
        virtual_key: "ABNT_C1",
        mac_key_code: None,
    },
];

/// Names of the non-character keys (`KEYNAME` section).
pub const KEY_NAMES: &[(u8, &str)] = &[
    (0x01, "Esc"),
    (0x0e, "Backspace"),
    (0x0f, "Tab"),
    (0x1c, "Enter"),
    (0x1d, "Ctrl"),
    (0x2a, "Shift"),
    (0x36, "Right Shift"),
    (0x37, "Num *"),
    (0x38, "Alt"),
    (0x39, "Space"),
    (0x3a, "Caps Lock"),
    (0x3b, "F1"),
    (0x3c, "F2"),
    (0x3d, "F3"),
    (0x3e, "F4"),
    (0x3f, "F5"),
    (0x40, "F6"),
    (0x41, "F7"),
    (0x42, "F8"),
    (0x43, "F9"),
    (0x44, "F10"),
    (0x45, "Pause"),
    (0x46, "Scroll Lock"),
    (0x47, "Num 7"),
    (0x48, "Num 8"),
    (0x49, "Num 9"),
    (0x4a, "Num -"),
    (0x4b, "Num 4"),
    (0x4c, "Num 5"),
    (0x4d, "Num 6"),
    (0x4e, "Num +"),
    (0x4f, "Num 1"),
    (0x50, "Num 2"),
    (0x51, "Num 3"),
    (0x52, "Num 0"),
    (0x53, "Num Del"),
    (0x54, "Sys Req"),
    (0x57, "F11"),
    (0x58, "F12"),
    (0x64, "F13"),
    (0x65, "F14"),
    (0x66, "F15"),
    (0x67, "F16"),
    (0x68, "F17"),
    (0x69, "F18"),
    (0x6a, "F19"),
    (0x6b, "F20"),
    (0x6c, "F21"),
    (0x6d, "F22"),
    (0x6e, "F23"),
    (0x76, "F24"),
];

/// Names of the extended (`E0`-prefixed) keys (`KEYNAME_EXT` section).
pub const KEY_NAMES_EXT: &[(u8, &str)] = &[
    (0x1c, "Num Enter"),
    (0x1d, "Right Ctrl"),
    (0x35, "Num /"),
    (0x37, "Prnt Scrn"),
    (0x38, "Right Alt"),
    (0x45, "Num Lock"),
    (0x46, "Break"),
    (0x47, "Home"),
    (0x48, "Up"),
    (0x49, "Page Up"),
    (0x4b, "Left"),
    (0x4d, "Right"),
    (0x4f, "End"),
    (0x50, "Down"),
    (0x51, "Page Down"),
    (0x52, "Insert"),
    (0x53, "Delete"),
    (0x54, "<00>"),
    (0x56, "Help"),
    (0x5b, "Left Windows"),
    (0x5c, "Right Windows"),
    (0x5d, "Application"),
];
