// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Component, ComponentCategory, ComponentId};

fn cid(value: &str) -> ComponentId {
    ComponentId::new(value).expect("component id")
}

fn component(
    id: &str,
    title: &str,
    short_title: &str,
    description: &str,
    category: ComponentCategory,
    details: &[&str],
    code_example: Option<&str>,
) -> Component {
    let mut component = Component::new(cid(id), title, short_title, description, category);
    component.set_details(details.iter().map(|detail| (*detail).to_owned()).collect());
    component.set_code_example(code_example);
    component
}

pub(super) fn components() -> Vec<Component> {
    vec![
        component(
            "config",
            "Playwright Test Runner & Config",
            "playwright.config.ts",
            "Central configuration for browsers, baseURL, retries, timeouts, reporters, projects (chromium, firefox, webkit), and testDir.",
            ComponentCategory::Core,
            &[
                "Defines which browsers to test (Chromium, Firefox, WebKit)",
                "Sets base URL for all tests",
                "Configures retry logic and timeouts",
                "Specifies test directory and output folders",
                "Manages reporter configurations",
                "Handles parallel execution settings",
            ],
            Some(r##"import { defineConfig, devices } from '@playwright/test';

export default defineConfig({
  testDir: './tests',
  fullyParallel: true,
  forbidOnly: !!process.env.CI,
  retries: process.env.CI ? 2 : 0,
  workers: process.env.CI ? 1 : undefined,
  reporter: [
    ['html'],
    ['allure-playwright']
  ],
  use: {
    baseURL: 'http://localhost:3000',
    trace: 'on-first-retry',
    screenshot: 'only-on-failure',
  },
  projects: [
    {
      name: 'chromium',
      use: { ...devices['Desktop Chrome'] },
    },
    {
      name: 'firefox',
      use: { ...devices['Desktop Firefox'] },
    },
    {
      name: 'webkit',
      use: { ...devices['Desktop Safari'] },
    },
  ],
});"##),
        ),
        component(
            "tests",
            "Test Specs",
            "tests/*.spec.ts",
            "Actual test files written in Playwright test syntax (test(), expect()). Call page objects, read JSON data, and assert UI behavior.",
            ComponentCategory::Core,
            &[
                "Contains test scenarios using test() and expect()",
                "Imports and uses page objects for clean test code",
                "Reads test data from JSON files",
                "Performs UI assertions and validations",
                "Organized by feature or user journey",
                "Supports test hooks (beforeEach, afterEach)",
            ],
            Some(r##"import { test, expect } from '@playwright/test';
import { LoginPage } from '../pages/LoginPage';
import { testData } from '../data/users.json';

test.describe('Login Flow', () => {
  let loginPage: LoginPage;

  test.beforeEach(async ({ page }) => {
    loginPage = new LoginPage(page);
    await loginPage.navigate();
  });

  test('should login with valid credentials', async () => {
    await loginPage.login(
      testData.validUser.email,
      testData.validUser.password
    );
    await expect(loginPage.successMessage).toBeVisible();
  });

  test('should show error with invalid credentials', async () => {
    await loginPage.login('invalid@email.com', 'wrongpass');
    await expect(loginPage.errorMessage).toBeVisible();
  });
});"##),
        ),
        component(
            "pages",
            "Page Object Layer",
            "pages/*.ts",
            "One file per page/screen. Encapsulates locators and reusable actions (login, addToCart, checkout) to keep tests clean.",
            ComponentCategory::Structure,
            &[
                "One class per page or component",
                "Encapsulates all locators for that page",
                "Provides reusable action methods",
                "Improves test maintainability",
                "Reduces code duplication",
                "Makes tests more readable",
            ],
            Some(r##"import { Page, Locator } from '@playwright/test';

export class LoginPage {
  readonly page: Page;
  readonly emailInput: Locator;
  readonly passwordInput: Locator;
  readonly loginButton: Locator;
  readonly errorMessage: Locator;
  readonly successMessage: Locator;

  constructor(page: Page) {
    this.page = page;
    this.emailInput = page.locator('#email');
    this.passwordInput = page.locator('#password');
    this.loginButton = page.locator('button[type="submit"]');
    this.errorMessage = page.locator('.error-message');
    this.successMessage = page.locator('.success-message');
  }

  async navigate() {
    await this.page.goto('/login');
  }

  async login(email: string, password: string) {
    await this.emailInput.fill(email);
    await this.passwordInput.fill(password);
    await this.loginButton.click();
  }
}"##),
        ),
        component(
            "data",
            "Test Data (JSON)",
            "data/*.json",
            "External test data files (users, products, env-specific data). Enables data-driven tests by looping over JSON objects.",
            ComponentCategory::Structure,
            &[
                "Stores test data separately from test logic",
                "Supports multiple environments (dev, qa, prod)",
                "Enables data-driven testing",
                "Easy to update without changing code",
                "Can include users, products, configurations",
                "Supports test data versioning",
            ],
            Some(r##"{
  "users": {
    "validUser": {
      "email": "test@example.com",
      "password": "SecurePass123!",
      "name": "Test User"
    },
    "adminUser": {
      "email": "admin@example.com",
      "password": "AdminPass456!",
      "role": "admin"
    }
  },
  "products": [
    {
      "id": "prod-001",
      "name": "Laptop",
      "price": 999.99
    },
    {
      "id": "prod-002",
      "name": "Mouse",
      "price": 29.99
    }
  ],
  "environments": {
    "dev": {
      "baseUrl": "http://localhost:3000",
      "apiUrl": "http://localhost:8080"
    },
    "qa": {
      "baseUrl": "https://qa.example.com",
      "apiUrl": "https://api-qa.example.com"
    }
  }
}"##),
        ),
        component(
            "utils",
            "Data Loader / Utility Layer",
            "utils/data-helper.ts",
            "Small helper that reads JSON, validates keys, and returns data to tests. Can switch data by environment or scenario.",
            ComponentCategory::Utilities,
            &[
                "Reads and parses JSON test data",
                "Validates data structure",
                "Provides type-safe data access",
                "Supports environment switching",
                "Handles data transformation",
                "Centralizes data loading logic",
            ],
            Some(r##"import * as fs from 'fs';
import * as path from 'path';

export class DataHelper {
  private static cache: Map<string, any> = new Map();

  static loadJSON<T>(filePath: string): T {
    if (this.cache.has(filePath)) {
      return this.cache.get(filePath);
    }

    const fullPath = path.join(__dirname, '../data', filePath);
    const rawData = fs.readFileSync(fullPath, 'utf-8');
    const data = JSON.parse(rawData);

    this.cache.set(filePath, data);
    return data;
  }

  static getUser(userType: string) {
    const data = this.loadJSON('users.json');
    return data.users[userType];
  }

  static getEnvironment(env: string = process.env.TEST_ENV || 'dev') {
    const data = this.loadJSON('environments.json');
    return data.environments[env];
  }
}"##),
        ),
        component(
            "fixtures",
            "Fixtures",
            "fixtures/*.ts",
            "Reusable setup/teardown (auth state, test user, API token, clean DB). Shared across tests so you don't repeat login/business setup.",
            ComponentCategory::Utilities,
            &[
                "Provides reusable test setup and teardown",
                "Manages authentication state",
                "Creates test users and data",
                "Handles database cleanup",
                "Shares context across tests",
                "Improves test isolation",
            ],
            Some(r##"import { test as base } from '@playwright/test';
import { LoginPage } from '../pages/LoginPage';

type MyFixtures = {
  authenticatedPage: Page;
  loginPage: LoginPage;
};

export const test = base.extend<MyFixtures>({
  authenticatedPage: async ({ page }, use) => {
    // Setup: Login before test
    const loginPage = new LoginPage(page);
    await loginPage.navigate();
    await loginPage.login('test@example.com', 'password');

    // Use the authenticated page
    await use(page);

    // Teardown: Logout after test
    await page.goto('/logout');
  },

  loginPage: async ({ page }, use) => {
    const loginPage = new LoginPage(page);
    await use(loginPage);
  },
});

export { expect } from '@playwright/test';"##),
        ),
        component(
            "env-config",
            "Environment / Config Manager",
            "config/env/*.ts",
            "Keeps URLs, credentials, and API keys for dev, qa, staging, prod. Test picks env via CLI arg or env variable.",
            ComponentCategory::Utilities,
            &[
                "Manages environment-specific configurations",
                "Stores URLs and API endpoints",
                "Handles credentials securely",
                "Supports multiple environments",
                "CLI-based environment selection",
                "Prevents hardcoded values in tests",
            ],
            Some(r##"export interface Environment {
  name: string;
  baseUrl: string;
  apiUrl: string;
  timeout: number;
}

const environments: Record<string, Environment> = {
  dev: {
    name: 'Development',
    baseUrl: 'http://localhost:3000',
    apiUrl: 'http://localhost:8080/api',
    timeout: 30000,
  },
  qa: {
    name: 'QA',
    baseUrl: 'https://qa.example.com',
    apiUrl: 'https://api-qa.example.com',
    timeout: 60000,
  },
  staging: {
    name: 'Staging',
    baseUrl: 'https://staging.example.com',
    apiUrl: 'https://api-staging.example.com',
    timeout: 60000,
  },
  prod: {
    name: 'Production',
    baseUrl: 'https://example.com',
    apiUrl: 'https://api.example.com',
    timeout: 90000,
  },
};

export function getEnvironment(): Environment {
  const env = process.env.TEST_ENV || 'dev';
  return environments[env] || environments.dev;
}"##),
        ),
        component(
            "common-utils",
            "Common Utilities",
            "utils/*.ts",
            "Helpers for dates, random data, file uploads, API calls, waits. Keeps specs short and readable.",
            ComponentCategory::Utilities,
            &[
                "Date and time utilities",
                "Random data generators",
                "File upload helpers",
                "API call wrappers",
                "Custom wait functions",
                "String manipulation tools",
            ],
            Some(r##"import { Page } from '@playwright/test';

export class TestUtils {
  static generateRandomEmail(): string {
    const timestamp = Date.now();
    return `test.${timestamp}@example.com`;
  }

  static formatDate(date: Date): string {
    return date.toISOString().split('T')[0];
  }

  static async uploadFile(page: Page, selector: string, filePath: string) {
    const fileInput = page.locator(selector);
    await fileInput.setInputFiles(filePath);
  }

  static async waitForNetworkIdle(page: Page, timeout = 5000) {
    await page.waitForLoadState('networkidle', { timeout });
  }

  static generateRandomString(length: number): string {
    const chars = 'ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789';
    let result = '';
    for (let i = 0; i < length; i++) {
      result += chars.charAt(Math.floor(Math.random() * chars.length));
    }
    return result;
  }
}"##),
        ),
        component(
            "custom-commands",
            "Custom Commands / Expect Extensions",
            "Custom Extensions",
            "Extra assertions or wrappers around Playwright actions for your domain. Makes tests more readable for the team.",
            ComponentCategory::Utilities,
            &[
                "Domain-specific assertions",
                "Custom matchers for expect()",
                "Reusable command wrappers",
                "Improves test readability",
                "Encapsulates complex logic",
                "Team-specific helpers",
            ],
            Some(r##"import { expect } from '@playwright/test';

// Custom matcher example
expect.extend({
  async toHaveValidationError(locator, expectedMessage) {
    const errorElement = locator.locator('.error-message');
    const isVisible = await errorElement.isVisible();
    const actualMessage = isVisible ? await errorElement.textContent() : '';

    const pass = isVisible && actualMessage?.includes(expectedMessage);

    return {
      pass,
      message: () =>
        pass
          ? `Expected not to have validation error "${expectedMessage}"`
          : `Expected to have validation error "${expectedMessage}", but got "${actualMessage}"`,
    };
  },
});

// Usage in tests:
// await expect(emailInput).toHaveValidationError('Invalid email format');"##),
        ),
        component(
            "allure-integration",
            "Allure Reporter Integration",
            "Allure Reporter",
            "Playwright config updated to use allure-playwright. Generates raw Allure results after test run. Adds steps, attachments, screenshots, and videos to reports.",
            ComponentCategory::Reporting,
            &[
                "Integrates with Playwright reporter system",
                "Generates detailed test reports",
                "Captures screenshots and videos",
                "Tracks test steps and duration",
                "Provides historical trends",
                "Supports attachments and logs",
            ],
            Some(r##"// In playwright.config.ts
import { defineConfig } from '@playwright/test';

export default defineConfig({
  reporter: [
    ['html'],
    ['allure-playwright', {
      detail: true,
      outputFolder: 'allure-results',
      suiteTitle: false,
    }]
  ],
  // ... other config
});

// In test file - adding steps
import { test } from '@playwright/test';
import { allure } from 'allure-playwright';

test('example with allure steps', async ({ page }) => {
  await allure.step('Navigate to login page', async () => {
    await page.goto('/login');
  });

  await allure.step('Enter credentials', async () => {
    await page.fill('#email', 'test@example.com');
    await page.fill('#password', 'password');
  });

  await allure.step('Submit form', async () => {
    await page.click('button[type="submit"]');
  });
});"##),
        ),
        component(
            "artifacts",
            "Screenshots & Video Artifacts",
            "test-results/",
            "Captured on failure or on demand. Attached to Allure so failures are easy to debug.",
            ComponentCategory::Reporting,
            &[
                "Automatic screenshot on failure",
                "Video recording of test execution",
                "Trace files for debugging",
                "Attached to test reports",
                "Configurable capture settings",
                "Helps with failure analysis",
            ],
            Some(r##"// In playwright.config.ts
export default defineConfig({
  use: {
    screenshot: 'only-on-failure',
    video: 'retain-on-failure',
    trace: 'on-first-retry',
  },
});

// Manual screenshot in test
test('example with manual screenshot', async ({ page }) => {
  await page.goto('/dashboard');

  // Take screenshot at specific point
  await page.screenshot({
    path: 'screenshots/dashboard.png',
    fullPage: true
  });

  // Attach to report
  await test.info().attach('Dashboard View', {
    body: await page.screenshot(),
    contentType: 'image/png',
  });
});"##),
        ),
        component(
            "allure-generate",
            "Allure Report Generation Script",
            "npm run allure:generate",
            "Script to convert raw Allure results into a nice HTML report. Can be run locally or inside CI.",
            ComponentCategory::Reporting,
            &[
                "Converts raw results to HTML",
                "Generates interactive reports",
                "Can run locally or in CI",
                "Provides test history",
                "Shows trends and statistics",
                "Supports custom themes",
            ],
            Some(r##"// In package.json
{
  "scripts": {
    "test": "playwright test",
    "test:headed": "playwright test --headed",
    "allure:generate": "allure generate allure-results --clean -o allure-report",
    "allure:open": "allure open allure-report",
    "allure:serve": "allure serve allure-results"
  }
}

// Command line usage:
// 1. Run tests: npm test
// 2. Generate report: npm run allure:generate
// 3. Open report: npm run allure:open

// Or combine: npm test && npm run allure:serve"##),
        ),
        component(
            "github-actions",
            "GitHub Actions Workflow",
            ".github/workflows/",
            "CI pipeline to: checkout code, install Node & deps, install Playwright browsers, run tests, generate Allure report, upload report as artifact. Runs on push, PR, or schedule.",
            ComponentCategory::Ci,
            &[
                "Automated CI/CD pipeline",
                "Runs on push, PR, or schedule",
                "Installs dependencies automatically",
                "Executes tests in parallel",
                "Generates and uploads reports",
                "Supports multiple environments",
            ],
            Some(r##"name: Playwright Tests

on:
  push:
    branches: [ main, develop ]
  pull_request:
    branches: [ main ]
  schedule:
    - cron: '0 2 * * *'  # Run daily at 2 AM

jobs:
  test:
    timeout-minutes: 60
    runs-on: ubuntu-latest
    steps:
    - uses: actions/checkout@v3

    - uses: actions/setup-node@v3
      with:
        node-version: 18

    - name: Install dependencies
      run: npm ci

    - name: Install Playwright Browsers
      run: npx playwright install --with-deps

    - name: Run Playwright tests
      run: npm test

    - name: Generate Allure Report
      if: always()
      run: npm run allure:generate

    - name: Upload Allure Report
      if: always()
      uses: actions/upload-artifact@v3
      with:
        name: allure-report
        path: allure-report/
        retention-days: 30"##),
        ),
        component(
            "ci-matrix",
            "CI Test Matrix",
            "Browser/OS Matrix",
            "In GitHub Actions, define matrix to run on chromium/firefox/webkit or linux/windows. Ensures coverage across browsers.",
            ComponentCategory::Ci,
            &[
                "Tests across multiple browsers",
                "Supports different operating systems",
                "Parallel execution",
                "Comprehensive coverage",
                "Identifies browser-specific issues",
                "Configurable combinations",
            ],
            Some(r##"name: Playwright Tests - Matrix

on: [push, pull_request]

jobs:
  test:
    timeout-minutes: 60
    runs-on: ${{ matrix.os }}
    strategy:
      fail-fast: false
      matrix:
        os: [ubuntu-latest, windows-latest, macos-latest]
        browser: [chromium, firefox, webkit]
        exclude:
          # WebKit on Linux can be flaky
          - os: ubuntu-latest
            browser: webkit
    steps:
    - uses: actions/checkout@v3
    - uses: actions/setup-node@v3
      with:
        node-version: 18
    - name: Install dependencies
      run: npm ci
    - name: Install Playwright
      run: npx playwright install --with-deps ${{ matrix.browser }}
    - name: Run tests
      run: npx playwright test --project=${{ matrix.browser }}"##),
        ),
        component(
            "package-scripts",
            "Package Scripts",
            "package.json",
            "Shortcuts like test, test:headed, test:smoke, allure:generate, allure:open. Standardizes how the team runs tests.",
            ComponentCategory::Structure,
            &[
                "Standardized command shortcuts",
                "Team-wide consistency",
                "Easy to remember commands",
                "Supports different test modes",
                "Integrates with CI/CD",
                "Documented in README",
            ],
            Some(r##"{
  "name": "playwright-framework",
  "version": "1.0.0",
  "scripts": {
    "test": "playwright test",
    "test:headed": "playwright test --headed",
    "test:debug": "playwright test --debug",
    "test:ui": "playwright test --ui",
    "test:smoke": "playwright test --grep @smoke",
    "test:regression": "playwright test --grep @regression",
    "test:chrome": "playwright test --project=chromium",
    "test:firefox": "playwright test --project=firefox",
    "test:webkit": "playwright test --project=webkit",
    "allure:generate": "allure generate allure-results --clean",
    "allure:open": "allure open allure-report",
    "allure:serve": "allure serve allure-results",
    "report": "playwright show-report"
  },
  "devDependencies": {
    "@playwright/test": "^1.40.0",
    "allure-playwright": "^2.10.0",
    "allure-commandline": "^2.25.0"
  }
}"##),
        ),
        component(
            "folder-structure",
            "Folder / Project Structure Convention",
            "Project Structure",
            "Clear separation: tests/, pages/, data/, utils/, fixtures/, reports/, .github/. Makes it easy for new QA/automation engineers to onboard.",
            ComponentCategory::Structure,
            &[
                "Organized directory structure",
                "Clear separation of concerns",
                "Easy navigation",
                "Scalable architecture",
                "Supports team collaboration",
                "Follows best practices",
            ],
            Some(r##"playwright-framework/
├── .github/
│   └── workflows/
│       └── playwright.yml
├── tests/
│   ├── auth/
│   │   ├── login.spec.ts
│   │   └── registration.spec.ts
│   ├── e2e/
│   │   ├── checkout.spec.ts
│   │   └── product-search.spec.ts
│   └── api/
│       └── users.spec.ts
├── pages/
│   ├── LoginPage.ts
│   ├── HomePage.ts
│   └── CheckoutPage.ts
├── data/
│   ├── users.json
│   ├── products.json
│   └── environments.json
├── utils/
│   ├── data-helper.ts
│   ├── test-utils.ts
│   └── api-client.ts
├── fixtures/
│   ├── auth.fixture.ts
│   └── test-data.fixture.ts
├── config/
│   └── env/
│       ├── dev.ts
│       ├── qa.ts
│       └── prod.ts
├── allure-results/
├── allure-report/
├── test-results/
├── playwright.config.ts
├── package.json
└── README.md"##),
        ),
        component(
            "readme",
            "README / Usage Doc",
            "README.md",
            "Explains how to run: local vs CI, how to add JSON data, how to view Allure. Critical for teams and students.",
            ComponentCategory::Structure,
            &[
                "Project overview and setup",
                "Installation instructions",
                "How to run tests",
                "Environment configuration",
                "Contributing guidelines",
                "Troubleshooting tips",
            ],
            Some(r##"# Playwright Test Framework

## Overview
Data-driven Playwright framework with Page Object Model, Allure reporting, and CI/CD integration.

## Prerequisites
- Node.js 18+
- npm or yarn

## Installation
```bash
npm install
npx playwright install
```

## Running Tests
```bash
# Run all tests
npm test

# Run in headed mode
npm run test:headed

# Run specific browser
npm run test:chrome

# Run with UI mode
npm run test:ui
```

## Environment Configuration
Set TEST_ENV environment variable:
```bash
TEST_ENV=qa npm test
```

## Viewing Reports
```bash
# Generate and open Allure report
npm run allure:serve

# Or generate then open
npm run allure:generate
npm run allure:open
```

## Project Structure
- `tests/` - Test specifications
- `pages/` - Page Object Models
- `data/` - Test data (JSON)
- `utils/` - Helper utilities
- `fixtures/` - Test fixtures

## Adding New Tests
1. Create page object in `pages/`
2. Add test data to `data/`
3. Write test spec in `tests/`
4. Run and verify

## CI/CD
Tests run automatically on push/PR via GitHub Actions.
View reports in Actions artifacts."##),
        ),
    ]
}
