#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// XML namespace URI under which Android resource attributes are declared.
pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Container kinds accepted as the root element of a screen layout.
pub const ROOT_LAYOUT_KINDS: &[&str] = &["LinearLayout", "RelativeLayout", "FrameLayout"];

/// Dimension token for a view that fills its parent.
pub const MATCH_PARENT: &str = "match_parent";

/// Dimension token for a view sized to its content.
pub const WRAP_CONTENT: &str = "wrap_content";
