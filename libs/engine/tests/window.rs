#[cfg(test)]
mod tests {
    use engine::window::{BlockWindow, safe_end, scan_start};

    #[test]
    fn test_safe_end_requires_head_above_confirmations() {
        assert_eq!(safe_end(0, 0), None);
        assert_eq!(safe_end(2, 2), None);
        assert_eq!(safe_end(3, 2), Some(1));
        assert_eq!(safe_end(100, 2), Some(98));
        assert_eq!(safe_end(5, 0), Some(5));
    }

    #[test]
    fn test_scan_start_floors_at_genesis() {
        assert_eq!(scan_start(None, 4), 0);
        assert_eq!(scan_start(Some(2), 4), 0);
        assert_eq!(scan_start(Some(98), 4), 94);
        assert_eq!(scan_start(Some(98), 0), 98);
    }

    #[test]
    fn test_window_never_exceeds_safe_end() {
        for head in 0..40u64 {
            for confirmations in 0..5 {
                let Some(end) = safe_end(head, confirmations) else {
                    assert!(head <= confirmations);
                    continue;
                };
                assert!(end + confirmations <= head);
                for checkpoint in 0..head {
                    let start = scan_start(Some(checkpoint), 3);
                    assert!(start <= checkpoint);
                    assert!(checkpoint - start <= 3);
                }
            }
        }
    }

    #[test]
    fn test_window_display() {
        assert_eq!(BlockWindow { start: 94, safe_end: 98 }.to_string(), "[94, 98]");
    }
}
