// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Practice, PracticeGroup};

fn group(category: &str, practices: Vec<Practice>) -> PracticeGroup {
    let mut group = PracticeGroup::new(category);
    *group.practices_mut() = practices;
    group
}

pub(super) fn practice_groups() -> Vec<PracticeGroup> {
    vec![
        group(
            "Test Organization",
            vec![
                Practice::new(
                    "Use Page Object Model",
                    "Encapsulate page-specific locators and actions in dedicated classes to improve maintainability and reduce duplication.",
                    "const loginPage = new LoginPage(page); await loginPage.login(email, password);",
                    "await page.fill(\"#email\", email); await page.fill(\"#password\", password); await page.click(\"button\");",
                ),
                Practice::new(
                    "Keep Tests Independent",
                    "Each test should be able to run independently without relying on the state from previous tests.",
                    "Use beforeEach() to set up fresh state for each test",
                    "Relying on test execution order or shared state between tests",
                ),
                Practice::new(
                    "Use Descriptive Test Names",
                    "Test names should clearly describe what is being tested and the expected outcome.",
                    "test(\"should display error message when login fails with invalid credentials\")",
                    "test(\"test1\")",
                ),
            ],
        ),
        group(
            "Locator Strategies",
            vec![
                Practice::new(
                    "Prefer User-Facing Attributes",
                    "Use locators that users can see and understand, like text content, labels, and ARIA roles.",
                    "page.getByRole(\"button\", { name: \"Submit\" })",
                    "page.locator(\"#btn-123-xyz\")",
                ),
                Practice::new(
                    "Use data-testid for Dynamic Content",
                    "For elements that change frequently or lack semantic meaning, use data-testid attributes.",
                    "page.getByTestId(\"user-profile-menu\")",
                    "page.locator(\"div > div > div:nth-child(3) > span\")",
                ),
                Practice::new(
                    "Avoid Brittle Selectors",
                    "Avoid selectors that depend on DOM structure or implementation details that may change.",
                    "page.getByLabel(\"Email address\")",
                    "page.locator(\"body > div:nth-child(2) > form > input:first-child\")",
                ),
            ],
        ),
        group(
            "Data Management",
            vec![
                Practice::new(
                    "Externalize Test Data",
                    "Store test data in JSON files or environment configs, not hardcoded in tests.",
                    "const user = DataHelper.getUser(\"validUser\"); await loginPage.login(user.email, user.password);",
                    "await loginPage.login(\"test@example.com\", \"password123\");",
                ),
                Practice::new(
                    "Use Fixtures for Setup",
                    "Leverage Playwright fixtures for reusable setup and teardown logic.",
                    "test.use({ authenticatedPage }); test(\"dashboard test\", async ({ authenticatedPage }) => {...})",
                    "Repeating login code in every test that needs authentication",
                ),
                Practice::new(
                    "Environment-Specific Configs",
                    "Maintain separate configurations for different environments (dev, qa, staging, prod).",
                    "const env = getEnvironment(process.env.TEST_ENV); baseURL: env.baseUrl",
                    "Hardcoding URLs and credentials in playwright.config.ts",
                ),
            ],
        ),
        group(
            "Assertions & Waits",
            vec![
                Practice::new(
                    "Use Auto-Waiting Assertions",
                    "Playwright's expect() automatically waits for conditions to be met.",
                    "await expect(page.locator(\".success\")).toBeVisible();",
                    "await page.waitForTimeout(5000); const isVisible = await page.locator(\".success\").isVisible();",
                ),
                Practice::new(
                    "Avoid Hard Waits",
                    "Never use waitForTimeout() except for debugging. Use smart waits instead.",
                    "await page.waitForLoadState(\"networkidle\"); await expect(element).toBeVisible();",
                    "await page.waitForTimeout(3000);",
                ),
                Practice::new(
                    "Assert on Multiple Conditions",
                    "Make your tests more robust by checking multiple aspects of the expected state.",
                    "await expect(successMessage).toBeVisible(); await expect(successMessage).toHaveText(\"Login successful\");",
                    "await expect(successMessage).toBeVisible(); // Only checking visibility",
                ),
            ],
        ),
        group(
            "Performance & Reliability",
            vec![
                Practice::new(
                    "Run Tests in Parallel",
                    "Configure Playwright to run tests in parallel for faster execution.",
                    "fullyParallel: true in playwright.config.ts",
                    "Running all tests sequentially",
                ),
                Practice::new(
                    "Use Retries Wisely",
                    "Configure retries for CI environments to handle flaky network conditions.",
                    "retries: process.env.CI ? 2 : 0",
                    "retries: 5 // Masking real test failures",
                ),
                Practice::new(
                    "Capture Artifacts on Failure",
                    "Automatically capture screenshots, videos, and traces when tests fail.",
                    "screenshot: \"only-on-failure\", video: \"retain-on-failure\", trace: \"on-first-retry\"",
                    "No artifact capture configuration",
                ),
            ],
        ),
        group(
            "CI/CD Integration",
            vec![
                Practice::new(
                    "Use GitHub Actions Matrix",
                    "Test across multiple browsers and operating systems using matrix strategy.",
                    "strategy: { matrix: { browser: [chromium, firefox, webkit] } }",
                    "Only testing on a single browser in CI",
                ),
                Practice::new(
                    "Upload Test Reports",
                    "Always upload test reports and artifacts for debugging failed CI runs.",
                    "actions/upload-artifact@v3 with allure-report and test-results",
                    "No artifact upload, making CI failures hard to debug",
                ),
                Practice::new(
                    "Run on Schedule",
                    "Set up scheduled runs (e.g., nightly) to catch issues early.",
                    "on: { schedule: [{ cron: \"0 2 * * *\" }] }",
                    "Only running tests on push/PR",
                ),
            ],
        ),
        group(
            "Code Quality",
            vec![
                Practice::new(
                    "Use TypeScript",
                    "TypeScript provides type safety and better IDE support for your test code.",
                    "Write tests in .ts files with proper type annotations",
                    "Using JavaScript without type checking",
                ),
                Practice::new(
                    "Follow Naming Conventions",
                    "Use consistent naming for files, classes, and methods across your framework.",
                    "LoginPage.ts, login.spec.ts, users.json",
                    "Inconsistent naming: loginPg.ts, Login_Test.spec.ts, user_data.JSON",
                ),
                Practice::new(
                    "Document Your Framework",
                    "Maintain a comprehensive README with setup instructions and usage examples.",
                    "Detailed README with prerequisites, installation, running tests, and troubleshooting",
                    "No documentation, new team members struggle to get started",
                ),
            ],
        ),
    ]
}
