//! Solver constants and render settings

/// Rows of the fixed pixel pattern searched for in the assembled image
///
/// `#` marks a required set pixel; spaces carry no constraint.
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

/// Number of image orientations examined during pattern search
pub const ORIENTATION_COUNT: usize = 8;

/// File extension collected when the target is a directory
pub const INPUT_EXTENSION: &str = "txt";

/// Suffix added to rendered composite filenames
pub const RENDER_SUFFIX: &str = "_composite";

/// Edge length in output pixels of one image pixel in rendered PNGs
pub const RENDER_SCALE: u32 = 4;

/// RGBA fill for unset pixels in rendered PNGs
pub const UNSET_COLOR: [u8; 4] = [16, 28, 54, 255];

/// RGBA fill for set pixels in rendered PNGs
pub const SET_COLOR: [u8; 4] = [198, 210, 234, 255];

/// RGBA fill for pattern-covered pixels in rendered PNGs
pub const MATCH_COLOR: [u8; 4] = [214, 69, 69, 255];
