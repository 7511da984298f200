// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// One numbered step of the implementation guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideStep {
    step: u8,
    title: String,
    description: String,
    commands: Vec<String>,
    tasks: Vec<String>,
}

impl GuideStep {
    pub fn new(step: u8, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            step,
            title: title.into(),
            description: description.into(),
            commands: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Shell commands to run for this step; may be empty.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn set_commands(&mut self, commands: Vec<String>) {
        self.commands = commands;
    }

    pub fn set_tasks(&mut self, tasks: Vec<String>) {
        self.tasks = tasks;
    }
}

#[cfg(test)]
mod tests {
    use super::GuideStep;

    #[test]
    fn guide_step_can_be_constructed_and_updated() {
        let mut step = GuideStep::new(1, "Project Setup", "Initialize the project.");

        assert_eq!(step.step(), 1);
        assert_eq!(step.title(), "Project Setup");
        assert_eq!(step.description(), "Initialize the project.");
        assert!(step.commands().is_empty());
        assert!(step.tasks().is_empty());

        step.set_commands(vec!["npm init -y".to_owned()]);
        step.set_tasks(vec!["Create project directory structure".to_owned()]);

        assert_eq!(step.commands(), ["npm init -y".to_owned()]);
        assert_eq!(step.tasks(), ["Create project directory structure".to_owned()]);
    }
}
