use std::fmt;

// 哲学者の行動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Thinking,
    PickedUpLeft,
    Eating,
    PutDownRight,
    RightBusy,
    PutDownLeft,
    Full,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Thinking => "is thinking",
            Phase::PickedUpLeft => "picked up left fork",
            Phase::Eating => "picked up right fork and starts eating",
            Phase::PutDownRight => "put down right fork",
            Phase::RightBusy => "could not pick up right fork and continues thinking",
            Phase::PutDownLeft => "put down left fork",
            Phase::Full => "is full and leaves the table",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub agent_id: usize,
    pub phase: Phase,
}

// イベントの受け手
// 受け取った結果はシミュレーションに影響しない (投げっぱなし)
pub trait Observer: Send + Sync {
    fn notify(&self, event: Event);
}

// log クレート経由で実況する
pub struct LogObserver;

impl Observer for LogObserver {
    fn notify(&self, event: Event) {
        log::info!("Philosopher #{} {}.", event.agent_id, event.phase);
    }
}
