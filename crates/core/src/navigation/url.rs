//! AWS console and SSO-directory URL construction
//!
//! Two link forms come out of here: the SSO-directory deep link (for the
//! directory's own "Default" profile) and the console federation link for
//! everything else. Switch-role links for remembered IAM logins are built
//! separately and carry a sentinel fragment the extension's page observer
//! recognizes.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use url::Url;

use rolehop_domain::constants::{
    AWSAPPS_START_DOMAIN, CONSOLE_HOME_URL, CONSOLE_HOST_PATTERN, SSO_DIRECTORY_PROFILE_NAME,
    SWITCH_ROLE_FRAGMENT, SWITCH_ROLE_URL,
};
use rolehop_domain::{ApplicationProfile, IamRole, Result, RoleHopError, User};

/// Everything outside the RFC 3986 unreserved set gets escaped, including
/// the `! ' ( ) *` sub-delims that `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

static CONSOLE_HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CONSOLE_HOST_PATTERN).expect("console host pattern is valid"));

/// Percent-encode a URL component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Whether `url` is an AWS console page (region/support/s3/health console
/// subdomains, or the GovCloud console).
pub fn is_console_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    parsed.scheme() == "https"
        && parsed.host_str().is_some_and(|host| CONSOLE_HOST_RE.is_match(host))
}

/// Build the URL that opens `profile` as `user`.
///
/// The directory's `"Default"` profile deep-links into the SSO directory
/// itself; any other profile goes through the console federation
/// endpoint. When the current tab is already a console page, the
/// federation link carries it as `destination` so the new session lands
/// back where the user was.
pub fn build_console_url(
    user: &User,
    profile: &ApplicationProfile,
    current_tab_url: Option<&str>,
) -> Result<String> {
    let directory_id = &user.managed_active_directory_id;
    if directory_id.is_empty() {
        return Err(RoleHopError::InvalidInput(format!(
            "user {} has no SSO directory id",
            user.user_id
        )));
    }

    if profile.profile.name == SSO_DIRECTORY_PROFILE_NAME {
        return Ok(format!(
            "https://{directory_id}.{AWSAPPS_START_DOMAIN}/#/saml/default/{}/{}",
            encode_component(&profile.profile.name),
            profile.profile.id,
        ));
    }

    let account_id = profile.account_id().ok_or_else(|| {
        RoleHopError::InvalidInput(format!(
            "profile {} has no account id in its search metadata",
            profile.profile.id
        ))
    })?;

    let mut url = format!(
        "https://{directory_id}.{AWSAPPS_START_DOMAIN}/#/console?account_id={account_id}&role_name={}",
        encode_component(&profile.profile.name),
    );
    if let Some(tab_url) = current_tab_url {
        if is_console_url(tab_url) {
            url.push_str("&destination=");
            url.push_str(&encode_component(tab_url));
        }
    }
    Ok(url)
}

/// Build a signin switch-role URL for a remembered IAM login.
///
/// The fragment is the sentinel the page observer uses to tell its own
/// role switches from manual ones.
pub fn build_switch_role_url(label: &str, role: &IamRole) -> String {
    format!(
        "{SWITCH_ROLE_URL}?displayName={}&roleName={}&account={}&redirect_uri={}#{SWITCH_ROLE_FRAGMENT}",
        encode_component(label),
        encode_component(&role.role_name),
        role.account_id,
        encode_component(CONSOLE_HOME_URL),
    )
}
