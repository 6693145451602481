use parking_lot::{Condvar, Mutex};

// 箸一本分の排他資源
// held が true の間は誰かが持っている
struct Fork {
    held: Mutex<bool>,
    cond: Condvar,
}

impl Fork {
    fn new() -> Self {
        Fork {
            held: Mutex::new(false),
            cond: Condvar::new(),
        }
    }
}

// テーブル上の箸すべて
// 箸同士の間に調整はなく、取る順番は呼び出し側 (哲学者) が決める
pub struct Forks {
    forks: Vec<Fork>,
}

impl Forks {
    pub fn new(n: usize) -> Self {
        Forks {
            forks: (0..n).map(|_| Fork::new()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.forks.len()
    }

    // i 番目の箸が空くまで待ってから取る
    pub fn acquire(&self, i: usize) -> ForkGuard<'_> {
        let fork = &self.forks[i];
        let mut held = fork.held.lock();
        while *held {
            fork.cond.wait(&mut held);
        }
        *held = true;
        ForkGuard { forks: self, id: i }
    }

    // 待たない。既に持たれていれば None
    pub fn try_acquire(&self, i: usize) -> Option<ForkGuard<'_>> {
        let mut held = self.forks[i].held.lock();
        if *held {
            return None;
        }
        *held = true;
        Some(ForkGuard { forks: self, id: i })
    }

    // 箸を置き、待っているスレッドがいれば 1 つだけ起こす
    pub fn release(&self, i: usize) {
        let fork = &self.forks[i];
        let mut held = fork.held.lock();
        assert!(*held, "fork {i} released while not held");
        *held = false;
        fork.cond.notify_one();
    }
}

// 箸を持っていることを表す型
// Drop で release されるので、置き忘れはない
pub struct ForkGuard<'a> {
    forks: &'a Forks,
    id: usize,
}

impl<'a> Drop for ForkGuard<'a> {
    fn drop(&mut self) {
        self.forks.release(self.id);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_try_acquire_held() {
        let forks = Forks::new(2);
        let g = forks.acquire(0);
        assert!(forks.try_acquire(0).is_none());
        // 他の箸には影響しない
        assert!(forks.try_acquire(1).is_some());
        drop(g);
        assert!(forks.try_acquire(0).is_some());
    }

    #[test]
    fn test_release_wakes_acquire() {
        let forks = Arc::new(Forks::new(1));
        let g = forks.try_acquire(0).unwrap();
        let (tx, rx) = mpsc::channel();

        let forks0 = forks.clone();
        let t = thread::spawn(move || {
            let _g = forks0.acquire(0);
            tx.send(()).unwrap();
        });

        // 持たれている間は acquire から戻ってこない
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
        drop(g);
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        t.join().unwrap();
        assert!(forks.try_acquire(0).is_some());
    }

    #[test]
    fn test_mutual_exclusion() {
        const NUM_THREADS: usize = 4;
        const NUM_LOOP: usize = 10000;

        let forks = Arc::new(Forks::new(1));
        let inside = Arc::new(AtomicUsize::new(0));
        let mut v = Vec::new();

        for i in 0..NUM_THREADS {
            let forks0 = forks.clone();
            let inside0 = inside.clone();
            let t = thread::spawn(move || {
                for _ in 0..NUM_LOOP {
                    // 半分のスレッドは try_acquire で取りに行く
                    let _g = if i % 2 == 0 {
                        forks0.acquire(0)
                    } else {
                        match forks0.try_acquire(0) {
                            Some(g) => g,
                            None => continue,
                        }
                    };
                    let n = inside0.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(n, 0);
                    inside0.fetch_sub(1, Ordering::SeqCst);
                }
            });
            v.push(t);
        }

        for t in v {
            t.join().unwrap();
        }
    }

    #[test]
    #[should_panic]
    fn test_release_unheld() {
        let forks = Forks::new(1);
        forks.release(0);
    }
}
