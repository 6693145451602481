use crate::fork::Forks;
use crate::observer::{Event, Observer, Phase};
use crate::work::{Work, WorkSimulator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentReport {
    pub id: usize,
    pub meals: usize,
    // 右の箸が取れずに食べそこねた回数
    pub missed: usize,
}

pub struct Philosopher {
    id: usize,
    left: usize,
    right: usize,
    meals: usize,
    missed: usize,
}

impl Philosopher {
    // n 人で円卓を囲んだときの id 番目の哲学者
    // 左の箸は前の哲学者の右の箸と同じもの
    pub fn new(id: usize, n: usize) -> Self {
        assert!(id < n);
        Philosopher {
            id,
            left: id,
            right: (id + 1) % n,
            meals: 0,
            missed: 0,
        }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    // limit 回食べるまで 考える -> 左を取る -> 右を試す -> 食べる -> 置く を繰り返す
    //
    // ブロックするのは左の箸の acquire だけで、右は try_acquire なので待たない
    // 左は各周回の最後に必ず置くので、循環待ちにはならない
    pub fn run(
        mut self,
        forks: &Forks,
        limit: usize,
        work: &dyn WorkSimulator,
        observer: &dyn Observer,
    ) -> AgentReport {
        while self.meals < limit {
            self.notify(observer, Phase::Thinking);
            work.perform(self.id, Work::Think);

            let left = forks.acquire(self.left);
            self.notify(observer, Phase::PickedUpLeft);

            match forks.try_acquire(self.right) {
                Some(right) => {
                    self.meals += 1;
                    self.notify(observer, Phase::Eating);
                    work.perform(self.id, Work::Eat);
                    drop(right);
                    self.notify(observer, Phase::PutDownRight);
                }
                None => {
                    // 失敗は競合しただけなのでエラーではない
                    self.missed += 1;
                    self.notify(observer, Phase::RightBusy);
                }
            }

            drop(left);
            self.notify(observer, Phase::PutDownLeft);
        }

        self.notify(observer, Phase::Full);
        AgentReport {
            id: self.id,
            meals: self.meals,
            missed: self.missed,
        }
    }

    fn notify(&self, observer: &dyn Observer, phase: Phase) {
        observer.notify(Event {
            agent_id: self.id,
            phase,
        });
    }
}
