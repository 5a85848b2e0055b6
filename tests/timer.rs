mod tests {
    use status_strip::{Duration, Instant, TimerQueue};
    use status_strip::timer::Expired;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_pop_expired_in_deadline_order() {
        let mut queue = TimerQueue::<&str, 4>::new();
        queue.schedule(at(0), Duration::from_millis(300), "late").unwrap();
        queue.schedule(at(0), Duration::from_millis(100), "early").unwrap();
        queue.schedule_at(at(200), "middle").unwrap();

        assert_eq!(queue.next_deadline(), Some(at(100)));
        assert_eq!(queue.pop_expired(at(99)), None);
        assert_eq!(
            queue.pop_expired(at(250)),
            Some(Expired {
                deadline: at(100),
                payload: "early"
            })
        );
        assert_eq!(queue.pop_expired(at(250)).map(|e| e.payload), Some("middle"));
        assert_eq!(queue.pop_expired(at(250)), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_same_deadline_fires_in_schedule_order() {
        let mut queue = TimerQueue::<u8, 4>::new();
        for payload in 1..=3 {
            queue.schedule_at(at(50), payload).unwrap();
        }

        let fired: Vec<u8> = core::iter::from_fn(|| queue.pop_expired(at(50)))
            .map(|e| e.payload)
            .collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::<u8, 4>::new();
        let first = queue.schedule_at(at(10), 1).unwrap();
        let second = queue.schedule_at(at(20), 2).unwrap();
        assert_ne!(first, second);

        assert!(queue.cancel(first));
        assert!(!queue.cancel(first));
        assert!(!queue.is_scheduled(first));
        assert!(queue.is_scheduled(second));
        assert_eq!(queue.pop_expired(at(100)).map(|e| e.payload), Some(2));
        assert!(!queue.cancel(second));
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = TimerQueue::<u8, 4>::new();
        queue.schedule_at(at(10), 1).unwrap();
        queue.schedule_at(at(20), 2).unwrap();

        queue.cancel_all();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert_eq!(queue.pop_expired(at(1_000)), None);
    }

    #[test]
    fn test_full_queue_returns_payload() {
        let mut queue = TimerQueue::<u8, 2>::new();
        queue.schedule_at(at(10), 1).unwrap();
        queue.schedule_at(at(10), 2).unwrap();

        assert_eq!(queue.schedule_at(at(10), 3), Err(3));
        assert_eq!(queue.len(), 2);
    }
}
