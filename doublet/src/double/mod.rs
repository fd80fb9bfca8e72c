mod logs;

use std::collections::HashMap;
use std::sync::Arc;

use logs::Logs;
use parking_lot::Mutex;

use crate::descriptor::MethodBody;
use crate::{Constraint, Times, TypeDescriptor, Value};

/// What arguments an expectation requires.
#[derive(Debug, Clone)]
pub enum ArgsExpectation {
    /// Calls match regardless of arguments
    Any,
    /// Every call must match this list
    Exact(Vec<Constraint>),
    /// Call `i` must match list `i`; calls beyond the last list are
    /// unconstrained
    Consecutive(Vec<Vec<Constraint>>),
}

struct ExpectationState {
    times: Times,
    args: ArgsExpectation,
}

struct MethodState {
    body: Option<MethodBody>,
    logs: Logs,
    expectations: Vec<ExpectationState>,
}

/// A configured test double. Clones share state, so one handle can be
/// injected into the code under test while another verifies.
#[derive(Clone)]
pub struct Double {
    name: &'static str,
    methods: Arc<Mutex<HashMap<&'static str, MethodState>>>,
}

impl Double {
    /// Creates a double with every method stubbed.
    pub fn of(target: &TypeDescriptor) -> Self {
        Self::create(target, false)
    }

    /// Creates a double that stubs bodyless members and runs concrete ones.
    pub fn of_abstract(target: &TypeDescriptor) -> Self {
        Self::create(target, true)
    }

    /// Creates a double whose concrete methods keep their original behavior.
    pub fn of_trait(target: &TypeDescriptor) -> Self {
        Self::create(target, true)
    }

    fn create(target: &TypeDescriptor, retain_bodies: bool) -> Self {
        let methods = target
            .methods
            .iter()
            .map(|method| {
                let body = if retain_bodies {
                    method.body.clone()
                } else {
                    None
                };
                let state = MethodState {
                    body,
                    logs: Logs::default(),
                    expectations: Vec::new(),
                };
                (method.name, state)
            })
            .collect();
        Self {
            name: target.name,
            methods: Arc::new(Mutex::new(methods)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers an expectation for the named method.
    #[track_caller]
    pub fn expect(&self, method: &str, times: Times, args: ArgsExpectation) {
        let mut methods = self.methods.lock();
        let state = match methods.get_mut(method) {
            Some(state) => state,
            None => panic!("{} has no method {}", self.name, method),
        };
        state.expectations.push(ExpectationState { times, args });
    }

    /// Dispatches a call: records it, checks it against every expectation
    /// registered for the method, and answers with the retained body's
    /// result or a `Null` stub.
    #[track_caller]
    pub fn call(&self, method: &str, args: Vec<Value>) -> Value {
        let body = {
            let mut methods = self.methods.lock();
            let state = match methods.get_mut(method) {
                Some(state) => state,
                None => panic!("{} has no method {}", self.name, method),
            };
            let index = state.logs.len();
            for expectation in &state.expectations {
                expectation.check_call(self.name, method, index, &args);
            }
            state.logs.push(args.clone());
            state.body.clone()
        };
        match body {
            // the lock is already released, so the body may re-enter
            Some(body) => (*body)(self, &args),
            None => Value::Null,
        }
    }

    /// Checks every registered cardinality against the recorded calls.
    #[track_caller]
    pub fn verify(&self) {
        let methods = self.methods.lock();
        for (method, state) in methods.iter() {
            let count = state.logs.len();
            for expectation in &state.expectations {
                if !expectation.times.contains(&count) {
                    panic!(
                        "Expected {}::{} to be called {} times, but it was called {} times",
                        self.name, method, expectation.times, count
                    );
                }
            }
        }
    }

    /// Returns the recorded argument lists for the named method.
    #[track_caller]
    pub fn calls(&self, method: &str) -> Vec<Vec<Value>> {
        let methods = self.methods.lock();
        match methods.get(method) {
            Some(state) => state.logs.all(),
            None => panic!("{} has no method {}", self.name, method),
        }
    }
}

impl ExpectationState {
    #[track_caller]
    fn check_call(&self, name: &str, method: &str, index: usize, args: &[Value]) {
        if let Times::Exact(limit) = self.times {
            if index >= limit {
                panic!(
                    "Expected {name}::{method} to be called {} times, but it was called {} times",
                    self.times,
                    index + 1
                );
            }
        }
        match &self.args {
            ArgsExpectation::Any => {}
            ArgsExpectation::Exact(constraints) => {
                check_args(name, method, constraints, args);
            }
            ArgsExpectation::Consecutive(lists) => {
                if let Some(constraints) = lists.get(index) {
                    check_args(name, method, constraints, args);
                }
            }
        }
    }
}

#[track_caller]
fn check_args(name: &str, method: &str, constraints: &[Constraint], args: &[Value]) {
    if args.len() < constraints.len() {
        panic!(
            "{name}::{method} expected {} arguments, but got {}",
            constraints.len(),
            args.len()
        );
    }
    for (position, (constraint, actual)) in constraints.iter().zip(args).enumerate() {
        if !constraint.matches(actual) {
            panic!(
                "argument {position} of {name}::{method} does not match {constraint:?}: got {actual:?}"
            );
        }
    }
}
