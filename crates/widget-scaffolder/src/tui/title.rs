//! ASCII banner in Zoho brand colors

use crate::runtime::PackageManager;
use colored::Colorize;

const TITLE_TEXT: &str = r"
  ___ __  _  _  __     ______ __ __   _   _  _ __   __ ___ _____
 |_  /__\| || |/__\   / _/ _ \  V  | | | | || | _\ / _] __|_   _|
  / / \/ | >< | \/ | | \_| v / \_/ | | 'V' || | v | [/\ _|  | |
 |___\__/|_||_|\__/   \__/_|_\_| |_| !_/ \_!|_|__/ \__/___| |_|
";

/// Zoho red, green, blue, yellow
const ZOHO_THEME: [(u8, u8, u8); 4] = [
    (0xE4, 0x25, 0x27),
    (0x08, 0x99, 0x49),
    (0x22, 0x6D, 0xB4),
    (0xF9, 0xB2, 0x1D),
];

pub fn render_title(package_manager: PackageManager) {
    // yarn and pnpm swallow the first line of output
    if matches!(package_manager, PackageManager::Yarn | PackageManager::Pnpm) {
        println!();
    }

    for (i, line) in TITLE_TEXT.lines().enumerate() {
        let (r, g, b) = ZOHO_THEME[i % ZOHO_THEME.len()];
        println!("{}", line.truecolor(r, g, b).bold());
    }
}
