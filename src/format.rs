/// Format a byte count with 1024-based units.
///
/// Every step truncates. Sizes of a gigabyte or more are shown as
/// `<gb>.<remaining mb> GB`, so `1.5 GB` means one gigabyte and five
/// megabytes, not one and a half. There is no terabyte tier.
pub fn format_size(bytes: u64) -> String {
    let kilobytes = bytes / 1024;
    if kilobytes < 1 {
        return format!("{bytes} B");
    }
    let megabytes = kilobytes / 1024;
    if megabytes < 1 {
        return format!("{kilobytes} KB");
    }
    let gigabytes = megabytes / 1024;
    if gigabytes < 1 {
        return format!("{megabytes} MB");
    }
    format!("{}.{} GB", gigabytes, megabytes % 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kb_truncates() {
        assert_eq!(format_size(KB), "1 KB");
        assert_eq!(format_size(2 * KB - 1), "1 KB");
        assert_eq!(format_size(MB - 1), "1023 KB");
    }

    #[test]
    fn test_format_size_mb() {
        assert_eq!(format_size(MB), "1 MB");
        assert_eq!(format_size(GB - 1), "1023 MB");
    }

    #[test]
    fn test_format_size_gb_uses_megabyte_remainder() {
        assert_eq!(format_size(GB), "1.0 GB");
        assert_eq!(format_size(GB + 5 * MB), "1.5 GB");
        assert_eq!(format_size(GB + 512 * MB), "1.512 GB");
        assert_eq!(format_size(2 * GB + 1023 * MB), "2.1023 GB");
    }

    #[test]
    fn test_format_size_has_no_tb_tier() {
        assert_eq!(format_size(1024 * GB), "1024.0 GB");
        assert_eq!(format_size(u64::MAX), "17179869183.1023 GB");
    }
}
