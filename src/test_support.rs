//! Test doubles shared by unit tests across modules.

use std::sync::Mutex;

use crate::launcher::ProcessSpawner;
use crate::platform::ForegroundActivator;

/// Records spawned programs instead of starting them
#[derive(Default)]
pub struct RecordingSpawner {
    pub spawned: Mutex<Vec<String>>,
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, program: &str) -> std::io::Result<u32> {
        let mut spawned = self.spawned.lock().unwrap();
        spawned.push(program.to_string());
        Ok(1000 + spawned.len() as u32)
    }
}

/// Records activation requests; optionally fails every one
#[derive(Default)]
pub struct RecordingActivator {
    pub pids: Mutex<Vec<u32>>,
    pub fail: bool,
}

impl ForegroundActivator for RecordingActivator {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn bring_to_front(&self, pid: u32) -> anyhow::Result<()> {
        self.pids.lock().unwrap().push(pid);
        if self.fail {
            anyhow::bail!("window not ready");
        }
        Ok(())
    }
}
