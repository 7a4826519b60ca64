#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use node_control::bsp::adc::{AnalogPin, ADC_MAX, V_MAX};
    use node_control::bsp::clock::Clock;
    use node_control::leq::LeqCalculator;
    use node_control::vrms::{AMP_GAIN_DB, MIC_SENSITIVITY_DBV, REFERENCE_SPL_DB};

    struct TestAdc {
        value: Cell<u16>,
    }

    impl AnalogPin for TestAdc {
        fn read(&self) -> u16 {
            self.value.get()
        }
    }

    /// Advances by one millisecond per poll so busy-waits terminate.
    struct SteppingClock {
        now: Cell<u32>,
    }

    impl Clock for SteppingClock {
        fn millis(&self) -> u32 {
            let now = self.now.get();
            self.now.set(now + 1);
            now
        }
    }

    fn li_of_constant(raw: u16) -> f64 {
        let vrms = f64::from(raw) * V_MAX / f64::from(ADC_MAX);
        20.0 * vrms.log10() - AMP_GAIN_DB - MIC_SENSITIVITY_DBV + REFERENCE_SPL_DB
    }

    #[test]
    fn li_is_folded_after_exactly_vrm_samples() {
        let adc = TestAdc {
            value: Cell::new(512),
        };
        let clock = SteppingClock { now: Cell::new(0) };
        let mut leq = LeqCalculator::new(&adc, &clock, 0.01, 10, 5);

        for _ in 0..9 {
            leq.accumulate();
            assert_eq!(leq.compute(), false);
        }
        assert_eq!(leq.li_count(), 0);
        assert_eq!(leq.sum_leq(), 0.0);

        leq.accumulate();
        leq.compute();
        assert_eq!(leq.li_count(), 1);
        assert!(leq.sum_leq() > 0.0);
    }

    #[test]
    fn ready_is_reported_exactly_once_per_leq_window() {
        let adc = TestAdc {
            value: Cell::new(512),
        };
        let clock = SteppingClock { now: Cell::new(0) };
        let mut leq = LeqCalculator::new(&adc, &clock, 0.01, 10, 5);

        let mut readies = 0;
        for cycle in 1..=50 {
            leq.accumulate();
            if leq.compute() {
                readies += 1;
                assert_eq!(cycle, 50);
                // the energy sum is cleared as soon as the value is emitted
                assert_eq!(leq.sum_leq(), 0.0);
                assert_eq!(leq.li_count(), 0);
            }
        }
        assert_eq!(readies, 1);
    }

    #[test]
    fn energy_average_of_identical_windows_is_the_window_value() {
        let adc = TestAdc {
            value: Cell::new(512),
        };
        let clock = SteppingClock { now: Cell::new(0) };
        let mut leq = LeqCalculator::new(&adc, &clock, 0.01, 10, 5);

        let mut got_leq = false;
        for _ in 0..50 {
            leq.accumulate();
            got_leq |= leq.compute();
        }
        assert!(got_leq);
        assert!((leq.leq() - li_of_constant(512)).abs() < 1e-9);
    }

    #[test]
    fn leq_matches_the_reference_formula_for_two_level_input() {
        let adc = TestAdc {
            value: Cell::new(400),
        };
        let clock = SteppingClock { now: Cell::new(0) };
        let ts = 1.0;
        let mut leq = LeqCalculator::new(&adc, &clock, ts, 4, 2);

        for _ in 0..4 {
            leq.accumulate();
            assert_eq!(leq.compute(), false);
        }
        adc.value.set(800);
        let mut ready = false;
        for _ in 0..4 {
            leq.accumulate();
            ready |= leq.compute();
        }
        assert!(ready);

        let li1 = li_of_constant(400);
        let li2 = li_of_constant(800);
        let sum = ts * 4.0 * 10f64.powf(0.1 * li1) + ts * 4.0 * 10f64.powf(0.1 * li2);
        let expected = 10.0 * (sum / (ts * 4.0 * 2.0)).log10();
        assert!((leq.leq() - expected).abs() < 1e-9);
    }

    /// The fold check and the finalize check run in the same call, so with
    /// a single-Li window one compute() both folds and reports ready.
    #[test]
    fn a_single_call_can_fold_and_finalize() {
        let adc = TestAdc {
            value: Cell::new(512),
        };
        let clock = SteppingClock { now: Cell::new(0) };
        let mut leq = LeqCalculator::new(&adc, &clock, 0.01, 3, 1);

        leq.accumulate();
        assert_eq!(leq.compute(), false);
        leq.accumulate();
        assert_eq!(leq.compute(), false);
        leq.accumulate();
        assert_eq!(leq.compute(), true);
        assert!((leq.leq() - li_of_constant(512)).abs() < 1e-9);
    }

    #[test]
    fn window_lengths_can_be_retuned_at_runtime() {
        let adc = TestAdc {
            value: Cell::new(512),
        };
        let clock = SteppingClock { now: Cell::new(0) };
        let mut leq = LeqCalculator::new(&adc, &clock, 0.01, 10, 5);

        leq.set_vrm_samples(2);
        leq.set_li_samples(3);
        assert_eq!(leq.vrm_samples(), 2);
        assert_eq!(leq.li_samples(), 3);

        let mut readies = 0;
        for cycle in 1..=6 {
            leq.accumulate();
            if leq.compute() {
                readies += 1;
                assert_eq!(cycle, 6);
            }
        }
        assert_eq!(readies, 1);
    }

    #[test]
    fn accumulate_paces_sampling_with_the_clock() {
        let adc = TestAdc {
            value: Cell::new(512),
        };
        let clock = SteppingClock { now: Cell::new(0) };
        let mut leq = LeqCalculator::new(&adc, &clock, 5.0, 10, 5);

        let before = clock.now.get();
        leq.accumulate();
        assert!(clock.now.get() >= before + 5);
        assert_eq!(leq.total_samples(), 1);
    }
}
