//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Extension identity
pub const DEFAULT_EXTENSION_NAME: &str = "rolehop";

/// `applicationName` value that marks a profile as an AWS account (as
/// opposed to another SSO-registered application).
pub const AWS_ACCOUNT_APPLICATION: &str = "AWS Account";

/// Sentinel value for `Settings::default_user` selecting the most recently
/// used user instead of a fixed user id.
pub const DEFAULT_USER_LAST_USED: &str = "lastUser";

/// Profile name that routes through the SSO directory deep link instead of
/// the console federation endpoint.
pub const SSO_DIRECTORY_PROFILE_NAME: &str = "Default";

// AWS endpoints
pub const AWSAPPS_START_DOMAIN: &str = "awsapps.com/start";
pub const SWITCH_ROLE_URL: &str = "https://signin.aws.amazon.com/switchrole";
pub const CONSOLE_HOME_URL: &str = "https://console.aws.amazon.com/console/home";

/// Hosts that count as "already on the AWS console" when deciding whether a
/// federation link should carry a `destination` parameter. Region, support,
/// s3 and health consoles are subdomains of the first; GovCloud uses its
/// own domain.
pub const CONSOLE_HOST_PATTERN: &str =
    r"^(?:[a-z0-9-]+\.)*console\.aws\.amazon\.com$|^console\.amazonaws-us-gov\.com$";

/// URL fragment appended to switch-role links so the extension's page
/// observer can tell its own role switches from manual ones.
pub const SWITCH_ROLE_FRAGMENT: &str = "rolehop";

// Customization defaults
pub const DEFAULT_PROFILE_COLOR: &str = "222f3e";
pub const DEFAULT_SESSION_LABEL_SSO: &str = "{{user}} {{profile}}";
pub const DEFAULT_SESSION_LABEL_IAM: &str = "{{user}} {{role}} {{account}}";
