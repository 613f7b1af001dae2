#![allow(dead_code)]

use std::cell::Cell;

use rand::{distributions::Alphanumeric, Rng};
use sibpf_either::Either;

pub const ROUNDS: usize = 200;

/// Counts how many times the callbacks it hands out are invoked.
#[derive(Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Wraps `f` so every call is counted.
    pub fn wrap<'a, A, B>(&'a self, f: impl FnOnce(A) -> B + 'a) -> impl FnOnce(A) -> B + 'a {
        move |a| {
            self.tick();
            f(a)
        }
    }
}

pub fn random_string() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(0..16);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
}

pub fn random_either() -> Either<String, i64> {
    let mut rng = rand::thread_rng();
    if rng.gen_bool(0.5) {
        Either::Left(random_string())
    } else {
        Either::Right(rng.gen_range(-1_000..1_000))
    }
}
