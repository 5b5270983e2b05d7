//! Unit tests for bf-core.

mod geo {
    use crate::geo::{polyline_length, GeoPoint};

    #[test]
    fn euclidean_is_symmetric() {
        let a = GeoPoint::new(12.93, 77.62);
        let b = GeoPoint::new(12.97, 77.70);
        assert_eq!(a.euclidean(b), b.euclidean(a));
    }

    #[test]
    fn euclidean_of_identical_points_is_zero() {
        let a = GeoPoint::new(12.93, 77.62);
        assert_eq!(a.euclidean(a), 0.0);
    }

    #[test]
    fn euclidean_axis_aligned() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 3.0);
        let c = GeoPoint::new(4.0, 0.0);
        assert_eq!(a.euclidean(b), 3.0);
        assert_eq!(a.euclidean(c), 4.0);
        assert_eq!(b.euclidean(c), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 24.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.lat, 11.0);
        assert_eq!(mid.lng, 22.0);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let line = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ];
        assert_eq!(polyline_length(&line), 2.0);
        assert_eq!(polyline_length(&line[..1]), 0.0);
        assert_eq!(polyline_length(&[]), 0.0);
    }
}

mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new(50);
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_ms(), 100);
    }

    #[test]
    fn ticks_for_ms_rounds_up() {
        let clock = SimClock::new(50);
        assert_eq!(clock.ticks_for_ms(50), 1);
        assert_eq!(clock.ticks_for_ms(75), 2);
        assert_eq!(clock.ticks_for_ms(500), 10);
        // Sub-tick delays still cost a full tick.
        assert_eq!(clock.ticks_for_ms(1), 1);
        assert_eq!(clock.ticks_for_ms(0), 1);
    }

    #[test]
    fn ticks_for_secs() {
        let clock = SimClock::new(50);
        assert_eq!(clock.ticks_for_secs(1), 20);
        assert_eq!(clock.ticks_for_secs(45), 900);
    }

    #[test]
    fn default_config_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn invalid_configs_rejected() {
        let mut cfg = SimConfig::default();
        cfg.bus_capacity = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.max_fleet_size = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.base_velocity = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.express_velocity_factor = 0.9;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.tick_duration_ms = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn express_velocity_scales() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.velocity(false), cfg.base_velocity);
        assert_eq!(cfg.velocity(true), cfg.base_velocity * cfg.express_velocity_factor);
    }
}

mod rng {
    use crate::{BusId, BusRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = BusRng::new(42, BusId(0));
        let mut b = BusRng::new(42, BusId(0));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000_000), b.gen_range(0..1_000_000));
        }
    }

    #[test]
    fn different_buses_different_streams() {
        let mut a = BusRng::new(42, BusId(0));
        let mut b = BusRng::new(42, BusId(1));
        let same = (0..16).all(|_| a.gen_range(0..1_000_000u32) == b.gen_range(0..1_000_000u32));
        assert!(!same, "independent bus streams should diverge");
    }
}
