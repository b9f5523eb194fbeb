// tests/common/mod.rs
//
// Scripted transport + recording view shared by the integration tests.
#![allow(dead_code)]

use std::io;
use std::sync::{Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use novedades::core::{FetchError, HttpResponse, Transport};
use novedades::data::TableRow;
use novedades::view::{PageState, View};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Get(String),
    Post(String),
}

/// What the fake server answers on each endpoint.
#[derive(Clone, Debug)]
pub enum Reply {
    Ok(u16, String),
    Down,
}

pub struct FakeTransport {
    data: Mutex<Reply>,
    scrape: Mutex<Reply>,
    calls: Mutex<Vec<Call>>,
    // requests under this base hang until `release`
    held: Mutex<Option<String>>,
    gate: Condvar,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(Reply::Ok(200, "[]".into())),
            scrape: Mutex::new(Reply::Ok(202, String::new())),
            calls: Mutex::new(Vec::new()),
            held: Mutex::new(None),
            gate: Condvar::new(),
        }
    }

    pub fn with_data(self, status: u16, body: &str) -> Self {
        self.set_data(Reply::Ok(status, body.into()));
        self
    }

    pub fn with_scrape(self, reply: Reply) -> Self {
        *self.scrape.lock().unwrap() = reply;
        self
    }

    pub fn set_data(&self, reply: Reply) {
        *self.data.lock().unwrap() = reply;
    }

    /// Requests to `base` are recorded, then block like a server that never answers.
    pub fn hold(self, base: &str) -> Self {
        *self.held.lock().unwrap() = Some(base.into());
        self
    }

    pub fn release(&self) {
        *self.held.lock().unwrap() = None;
        self.gate.notify_all();
    }

    fn wait_if_held(&self, url: &str) {
        let mut held = self.held.lock().unwrap();
        while held.as_deref().is_some_and(|base| url.starts_with(base)) {
            held = self.gate.wait(held).unwrap();
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn gets(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::Get(_))).count()
    }
}

fn refused(url: &str) -> FetchError {
    FetchError::transport(url, io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.lock().unwrap().push(Call::Get(url.into()));
        self.wait_if_held(url);
        match self.data.lock().unwrap().clone() {
            Reply::Ok(status, body) => Ok(HttpResponse { status, body }),
            Reply::Down => Err(refused(url)),
        }
    }

    fn post(&self, url: &str) -> Result<u16, FetchError> {
        self.calls.lock().unwrap().push(Call::Post(url.into()));
        self.wait_if_held(url);
        match self.scrape.lock().unwrap().clone() {
            Reply::Ok(status, _) => Ok(status),
            Reply::Down => Err(refused(url)),
        }
    }
}

/// Poll `cond` for up to two seconds (GUI jobs run on worker threads).
pub fn wait_until(cond: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    cond()
}

/// PageState that also remembers every message it was given, in order.
#[derive(Default)]
pub struct Recorder {
    pub page: PageState,
    pub messages: Vec<String>,
}

impl View for Recorder {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.page.set_message(msg);
    }

    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.page.replace_rows(rows);
    }
}
