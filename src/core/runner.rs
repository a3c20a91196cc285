use crate::domain::model::Pattern;
use crate::domain::ports::GreetingScene;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub pattern: Pattern,
    pub initial_greeting: String,
    pub final_greeting: String,
    pub taps: usize,
}

impl RunReport {
    /// Line to print once the run is over. `None` when the surface already showed the label.
    pub fn final_output(&self, surface_echoes: bool) -> Option<&str> {
        if surface_echoes {
            None
        } else {
            Some(self.final_greeting.as_str())
        }
    }
}

/// Drives one scene: load it, deliver the taps one after another, report.
pub struct SceneRunner<S: GreetingScene + ?Sized> {
    scene: Box<S>,
}

impl<S: GreetingScene + ?Sized> SceneRunner<S> {
    pub fn new(scene: Box<S>) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn run(&self, taps: usize) -> Result<RunReport> {
        let pattern = self.scene.pattern();
        tracing::info!("🚀 Loading {} scene", pattern);

        self.scene.load();
        let initial_greeting = self.scene.greeting();

        for n in 1..=taps {
            tracing::debug!("delivering tap {}/{}", n, taps);
            self.scene.tap()?;
        }

        let final_greeting = self.scene.greeting();
        tracing::info!("✅ {} tap(s) delivered, label now '{}'", taps, final_greeting);

        Ok(RunReport {
            pattern,
            initial_greeting,
            final_greeting,
            taps,
        })
    }
}
