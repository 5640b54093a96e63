//! Manual Xcode instructions printed after a successful check.

use serde::{Deserialize, Serialize};

use crate::core::manifest::{Manifest, base_name};

/// Names that appear in the instruction block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct XcodeGuide {
    /// Project navigator folder to right-click.
    pub group: String,
    /// Name shown in Xcode's "Add Files to ..." menu item.
    pub target: String,
    /// Command to run once the files are added.
    pub follow_up: String,
}

impl Default for XcodeGuide {
    fn default() -> Self {
        Self {
            group: "CoeurCosmique".to_string(),
            target: "CoeurCosmique".to_string(),
            follow_up: "./sync-xcode.sh".to_string(),
        }
    }
}

impl XcodeGuide {
    /// Render the instruction block, starting with a blank separator line.
    pub fn render(&self, manifest: &Manifest) -> String {
        let mut lines = vec![
            String::new(),
            "📝 All files exist, they must be added to the project manually...".to_string(),
            String::new(),
            "⚠️  MANUAL XCODE INSTRUCTIONS:".to_string(),
            format!("1. In Xcode, right-click the '{}' folder", self.group),
            format!("2. Choose 'Add Files to {}...'", self.target),
        ];
        if manifest.is_empty() {
            lines.push("3. Nothing to add, the manifest lists no files".to_string());
        } else {
            lines.push(format!("3. Select {}:", file_count(manifest.len())));
            for entry in manifest.iter() {
                lines.push(format!("   - {}", base_name(entry)));
            }
        }
        lines.push("4. Make sure 'Copy items if needed' is UNCHECKED".to_string());
        lines.push("5. Click 'Add'".to_string());
        lines.push(String::new());
        lines.push(format!("6. Then run: {}", self.follow_up));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

fn file_count(count: usize) -> String {
    if count == 1 {
        "this file".to_string()
    } else {
        format!("these {count} files")
    }
}
