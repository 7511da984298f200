// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::GuideStep;

fn step(
    number: u8,
    title: &str,
    description: &str,
    commands: &[&str],
    tasks: &[&str],
) -> GuideStep {
    let mut step = GuideStep::new(number, title, description);
    step.set_commands(commands.iter().map(|command| (*command).to_owned()).collect());
    step.set_tasks(tasks.iter().map(|task| (*task).to_owned()).collect());
    step
}

pub(super) fn steps() -> Vec<GuideStep> {
    vec![
        step(
            1,
            "Project Setup",
            "Initialize your Playwright project with the proper structure",
            &[
                "npm init -y",
                "npm install -D @playwright/test",
                "npm install -D allure-playwright allure-commandline",
                "npx playwright install",
            ],
            &[
                "Create project directory structure",
                "Initialize package.json",
                "Install Playwright and dependencies",
                "Install browser binaries",
            ],
        ),
        step(
            2,
            "Configure Playwright",
            "Set up playwright.config.ts with browsers, reporters, and test settings",
            &["npx playwright init"],
            &[
                "Create playwright.config.ts",
                "Configure test directory and output folders",
                "Set up multiple browser projects (Chromium, Firefox, WebKit)",
                "Configure Allure reporter",
                "Set base URL and global timeout",
                "Configure screenshot and video settings",
            ],
        ),
        step(
            3,
            "Create Folder Structure",
            "Organize your framework with clear separation of concerns",
            &[],
            &[
                "Create tests/ directory for test specifications",
                "Create pages/ directory for Page Object Models",
                "Create data/ directory for test data JSON files",
                "Create utils/ directory for helper functions",
                "Create fixtures/ directory for test fixtures",
                "Create config/env/ for environment configurations",
            ],
        ),
        step(
            4,
            "Implement Page Objects",
            "Build reusable Page Object Models for your application pages",
            &[],
            &[
                "Create a base page class with common methods",
                "Implement page classes for each application page",
                "Define locators as class properties",
                "Create action methods for user interactions",
                "Add assertion methods for validations",
                "Export page objects for use in tests",
            ],
        ),
        step(
            5,
            "Create Test Data",
            "Set up JSON files for data-driven testing",
            &[],
            &[
                "Create users.json with test user data",
                "Create products.json or relevant domain data",
                "Create environments.json for different test environments",
                "Implement data helper utilities to load JSON",
                "Add data validation logic",
                "Support environment-specific data switching",
            ],
        ),
        step(
            6,
            "Build Utilities & Fixtures",
            "Create reusable helpers and test fixtures",
            &[],
            &[
                "Implement data-helper.ts for JSON loading",
                "Create common utilities for dates, random data, etc.",
                "Build custom fixtures for authentication",
                "Set up database cleanup fixtures",
                "Create API helper utilities",
                "Implement custom matchers if needed",
            ],
        ),
        step(
            7,
            "Write Test Specifications",
            "Create your actual test files using page objects and data",
            &[],
            &[
                "Import page objects and test data",
                "Use fixtures for setup and teardown",
                "Write test scenarios with descriptive names",
                "Implement assertions using expect()",
                "Add test tags for categorization (@smoke, @regression)",
                "Use beforeEach/afterEach hooks appropriately",
            ],
        ),
        step(
            8,
            "Configure Package Scripts",
            "Add convenient npm scripts for running tests",
            &[],
            &[
                "Add \"test\" script for running all tests",
                "Add \"test:headed\" for debugging",
                "Add \"test:ui\" for UI mode",
                "Add browser-specific scripts",
                "Add Allure report generation scripts",
                "Add environment-specific test scripts",
            ],
        ),
        step(
            9,
            "Set Up CI/CD Pipeline",
            "Configure GitHub Actions for automated testing",
            &[],
            &[
                "Create .github/workflows/playwright.yml",
                "Configure triggers (push, pull_request, schedule)",
                "Set up Node.js and dependency installation",
                "Install Playwright browsers in CI",
                "Run tests and generate reports",
                "Upload Allure reports as artifacts",
                "Optional: Set up test matrix for multiple browsers/OS",
            ],
        ),
        step(
            10,
            "Run & Validate",
            "Execute tests and verify everything works",
            &["npm test", "npm run allure:generate", "npm run allure:open"],
            &[
                "Run tests locally to verify setup",
                "Check that all tests pass",
                "Generate Allure report",
                "Review test results and screenshots",
                "Verify CI/CD pipeline execution",
                "Document any setup requirements in README",
            ],
        ),
    ]
}
