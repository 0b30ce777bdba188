pub mod db;
pub mod orderdb;
pub mod servicedb;
pub mod userdb;
pub mod workerdb;

/// LIMIT/OFFSET arithmetic for paginated listings. Page numbers below 1
/// (including a page that truncated to 0 on the way in) land on offset 0
/// instead of underflowing.
pub(crate) fn page_offset(page: u32, limit: usize) -> i64 {
    page.saturating_sub(1) as i64 * limit as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset_basic() {
        assert_eq!(page_offset(1, 50), 0);
        assert_eq!(page_offset(2, 50), 50);
        assert_eq!(page_offset(3, 20), 40);
    }

    #[test]
    fn test_page_offset_does_not_underflow() {
        // A query like ?page=4294967296 truncates to 0 in the u32 cast.
        let truncated = 4294967296usize as u32;
        assert_eq!(truncated, 0);
        assert_eq!(page_offset(truncated, 50), 0);
        assert_eq!(page_offset(0, 50), 0);
    }
}
