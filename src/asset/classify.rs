/// Divisibility thresholds used by the power-of-two test.
const POT_THRESHOLDS: [u32; 9] = [4, 16, 32, 64, 128, 256, 512, 1024, 2048];

/// Pixel-format name prefixes treated as block-compressed.
const COMPRESSED_PREFIXES: [&str; 4] = ["ETC", "ASTC", "PVRTC", "DXT"];

/// Classify texture dimensions as power-of-two.
///
/// Each threshold at or below a dimension must divide it evenly; both
/// dimensions are checked independently against the same list. This is a
/// divisibility-chain approximation of a power-of-two check, kept
/// bit-for-bit compatible with the historical classifier: thresholds
/// above a dimension never fail it, so 1 and 2 trivially pass.
pub fn is_pot(width: u32, height: u32) -> bool {
	for threshold in POT_THRESHOLDS {
		if threshold <= width && width % threshold != 0 {
			return false;
		}
		if threshold <= height && height % threshold != 0 {
			return false;
		}
	}
	true
}

/// Classify a pixel format as block-compressed by its canonical name.
pub fn is_compressed(format: &str) -> bool {
	COMPRESSED_PREFIXES.iter().any(|prefix| format.starts_with(prefix))
}

#[cfg(test)]
mod tests {
	use super::{POT_THRESHOLDS, is_compressed, is_pot};

	fn dimension_passes(dim: u32) -> bool {
		POT_THRESHOLDS.iter().all(|threshold| *threshold > dim || dim % threshold == 0)
	}

	#[test]
	fn pot_matches_threshold_chain_over_full_range() {
		for dim in 1..=4096 {
			assert_eq!(is_pot(dim, dim), dimension_passes(dim), "dim {dim}");
		}
	}

	#[test]
	fn pot_checks_both_dimensions_independently() {
		for width in [1, 2, 4, 64, 100, 640, 1000, 2048] {
			for height in [1, 3, 16, 96, 300, 1024, 4096] {
				let expected = dimension_passes(width) && dimension_passes(height);
				assert_eq!(is_pot(width, height), expected, "{width}x{height}");
			}
		}
	}

	#[test]
	fn tiny_dimensions_trivially_pass() {
		assert!(is_pot(1, 1));
		assert!(is_pot(2, 2));
		assert!(is_pot(1, 2));
	}

	#[test]
	fn non_power_of_two_dimensions_fail() {
		assert!(!is_pot(100, 64));
		assert!(!is_pot(64, 100));
		assert!(!is_pot(640, 480));
	}

	#[test]
	fn compressed_formats_match_by_prefix() {
		assert!(is_compressed("ETC2_RGBA8"));
		assert!(is_compressed("ASTC_RGB_4x4"));
		assert!(is_compressed("PVRTC_RGBA4"));
		assert!(is_compressed("DXT5"));
		assert!(!is_compressed("RGBA32"));
		assert!(!is_compressed("ARGB4444"));
	}

	#[test]
	fn compressed_prefix_check_is_case_sensitive() {
		assert!(!is_compressed("etc2_rgba8"));
		assert!(!is_compressed("astc_rgb_4x4"));
	}
}
