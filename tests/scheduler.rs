mod tests {
    use embassy_futures::block_on;
    use embassy_futures::select::{Either, select};
    use embassy_time::Timer;
    use myrtio_underglow::{Duration, SchedulerState, TickScheduler};

    #[test]
    fn test_scheduler_starts_suspended() {
        let scheduler = TickScheduler::new(Duration::from_millis(50));
        assert_eq!(scheduler.state(), SchedulerState::Suspended);
        assert_eq!(scheduler.interval(), Duration::from_millis(50));
        assert!(!scheduler.request_tick());
        assert!(!scheduler.has_pending_tick());
    }

    #[test]
    fn test_resume_submits_tick() {
        let scheduler = TickScheduler::new(Duration::from_millis(50));
        scheduler.resume();
        assert!(scheduler.is_running());
        assert!(scheduler.has_pending_tick());

        block_on(scheduler.wait_tick());
        assert!(!scheduler.has_pending_tick());
    }

    #[test]
    fn test_ticks_coalesce() {
        let scheduler = TickScheduler::new(Duration::from_millis(50));
        scheduler.resume();
        block_on(scheduler.wait_tick());

        assert!(scheduler.request_tick());
        assert!(scheduler.request_tick());
        assert!(scheduler.request_tick());
        assert!(scheduler.has_pending_tick());

        block_on(scheduler.wait_tick());
        assert!(!scheduler.has_pending_tick());
    }

    #[test]
    fn test_suspend_drops_pending_tick() {
        let scheduler = TickScheduler::new(Duration::from_millis(50));
        scheduler.resume();
        scheduler.suspend();

        assert_eq!(scheduler.state(), SchedulerState::Suspended);
        assert!(!scheduler.has_pending_tick());
        assert!(!scheduler.request_tick());
    }

    #[test]
    fn test_timer_loop_follows_state() {
        let scheduler = TickScheduler::new(Duration::from_millis(10));
        scheduler.resume();
        block_on(scheduler.wait_tick());

        let outcome = block_on(select(scheduler.run(), async {
            // Timer tick
            scheduler.wait_tick().await;

            scheduler.suspend();
            Timer::after_millis(50).await;
            assert!(!scheduler.has_pending_tick());

            // Immediate tick, then the re-armed timer
            scheduler.resume();
            scheduler.wait_tick().await;
            scheduler.wait_tick().await;
            assert!(scheduler.is_running());
        }));
        assert!(matches!(outcome, Either::Second(())));
    }
}
