use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::error::SimError;
use crate::fork::Forks;
use crate::observer::Observer;
use crate::philosopher::{AgentReport, Philosopher};
use crate::work::WorkSimulator;

// 円卓。箸と、哲学者のスレッドを持つ
pub struct Table {
    forks: Arc<Forks>,
    meals: usize,
    work: Arc<dyn WorkSimulator>,
    observer: Arc<dyn Observer>,
}

impl Table {
    pub fn new(
        agents: usize,
        meals: usize,
        work: Arc<dyn WorkSimulator>,
        observer: Arc<dyn Observer>,
    ) -> Result<Self, SimError> {
        if agents < 2 {
            return Err(SimError::InvalidConfig(format!(
                "cannot set a table for {agents} philosopher(s)"
            )));
        }
        Ok(Table {
            forks: Arc::new(Forks::new(agents)),
            meals,
            work,
            observer,
        })
    }

    // 全員を同時に座らせ、全員が満腹になるまで待つ
    // スレッドを 1 つでも作れなければ、作れた分を待ってからエラーを返す
    pub fn run(self) -> Result<Vec<AgentReport>, SimError> {
        let n = self.forks.len();
        let mut v: Vec<JoinHandle<AgentReport>> = Vec::with_capacity(n);

        for id in 0..n {
            let forks = self.forks.clone();
            let work = self.work.clone();
            let observer = self.observer.clone();
            let meals = self.meals;

            let spawned = thread::Builder::new()
                .name(format!("philosopher-{id}"))
                .spawn(move || {
                    let p = Philosopher::new(id, forks.len());
                    log::debug!("philosopher #{id} sits between forks {} and {}", p.left(), p.right());
                    p.run(&forks, meals, &*work, &*observer)
                });

            match spawned {
                Ok(t) => v.push(t),
                Err(source) => {
                    log::error!("failed to create philosopher thread #{id}: {source}");
                    for t in v {
                        let _ = t.join();
                    }
                    return Err(SimError::AgentStart { id, source });
                }
            }
        }
        log::debug!("{n} philosophers seated");

        let mut reports = Vec::with_capacity(n);
        let mut panicked = None;
        for (id, t) in v.into_iter().enumerate() {
            match t.join() {
                Ok(r) => reports.push(r),
                Err(_) => {
                    log::error!("philosopher thread #{id} panicked");
                    panicked.get_or_insert(id);
                }
            }
        }
        log::debug!("all philosophers left the table");

        // 箸はここで片付ける
        drop(self.forks);

        match panicked {
            Some(id) => Err(SimError::AgentPanicked(id)),
            None => Ok(reports),
        }
    }
}
