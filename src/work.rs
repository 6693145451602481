use std::thread;
use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Work {
    Think,
    Eat,
}

// 考える・食べる時間をシミュレートする
// 他の哲学者に依存せず、有限時間で戻ること
pub trait WorkSimulator: Send + Sync {
    fn perform(&self, agent_id: usize, work: Work);
}

// min_ms 以上 max_ms 以下のランダムな時間スリープ
pub struct RandomDelay {
    min_ms: u64,
    max_ms: u64,
}

impl RandomDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        assert!(min_ms <= max_ms);
        RandomDelay { min_ms, max_ms }
    }

    fn pick(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}

impl WorkSimulator for RandomDelay {
    fn perform(&self, _agent_id: usize, _work: Work) {
        thread::sleep(self.pick());
    }
}

// 待たない
pub struct NoDelay;

impl WorkSimulator for NoDelay {
    fn perform(&self, _agent_id: usize, _work: Work) {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pick_in_range() {
        let d = RandomDelay::new(100, 200);
        for _ in 0..1000 {
            let t = d.pick();
            assert!(t >= Duration::from_millis(100) && t <= Duration::from_millis(200));
        }
    }

    #[test]
    fn test_pick_fixed() {
        let d = RandomDelay::new(7, 7);
        assert_eq!(d.pick(), Duration::from_millis(7));
    }
}
