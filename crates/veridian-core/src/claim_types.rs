//! Well-known JWT/OIDC claim-type names
//!
//! Centralizes the registered claim types used by the token pipeline so
//! call sites never compare against inline string literals. Names follow
//! RFC 7519 and OpenID Connect Core 1.0.

/// `sub` - unique identifier for the subject
pub const SUBJECT: &str = "sub";

/// `auth_time` - time of the original authentication, epoch seconds
pub const AUTH_TIME: &str = "auth_time";

/// `idp` - identity provider that authenticated the subject
pub const IDENTITY_PROVIDER: &str = "idp";

/// `amr` - authentication method reference
pub const AUTHENTICATION_METHOD: &str = "amr";

/// `acr` - authentication context class reference
pub const AUTHENTICATION_CONTEXT_CLASS: &str = "acr";

/// `client_id` - the client a token was issued to
pub const CLIENT_ID: &str = "client_id";

/// `scope` - a granted scope name; one claim per scope
pub const SCOPE: &str = "scope";

/// `iss` - issuer
pub const ISSUER: &str = "iss";

/// `aud` - audience
pub const AUDIENCE: &str = "aud";

/// `azp` - authorized party
pub const AUTHORIZED_PARTY: &str = "azp";

/// `exp` - expiration time, epoch seconds
pub const EXPIRATION: &str = "exp";

/// `nbf` - not-before time, epoch seconds
pub const NOT_BEFORE: &str = "nbf";

/// `iat` - issued-at time, epoch seconds
pub const ISSUED_AT: &str = "iat";

/// `jti` - unique token identifier
pub const JWT_ID: &str = "jti";

/// `nonce` - value binding an identity token to its authorization request
pub const NONCE: &str = "nonce";

/// `at_hash` - access token hash
pub const ACCESS_TOKEN_HASH: &str = "at_hash";

/// `c_hash` - authorization code hash
pub const AUTHORIZATION_CODE_HASH: &str = "c_hash";

/// `s_hash` - state hash
pub const STATE_HASH: &str = "s_hash";

/// `sid` - session identifier
pub const SESSION_ID: &str = "sid";

/// Internal handle linking a reference token to its stored payload
pub const REFERENCE_TOKEN_ID: &str = "reference_token_id";

// Standard profile claim names, as bundled by the standard identity
// resources (OpenID Connect Core 1.0, section 5.1).

/// `name` - full name
pub const NAME: &str = "name";

/// `given_name` - given name(s)
pub const GIVEN_NAME: &str = "given_name";

/// `family_name` - surname(s)
pub const FAMILY_NAME: &str = "family_name";

/// `middle_name` - middle name(s)
pub const MIDDLE_NAME: &str = "middle_name";

/// `nickname` - casual name
pub const NICKNAME: &str = "nickname";

/// `preferred_username` - shorthand name the subject goes by
pub const PREFERRED_USERNAME: &str = "preferred_username";

/// `profile` - profile page URL
pub const PROFILE: &str = "profile";

/// `picture` - profile picture URL
pub const PICTURE: &str = "picture";

/// `website` - web page or blog URL
pub const WEBSITE: &str = "website";

/// `gender` - gender
pub const GENDER: &str = "gender";

/// `birthdate` - birthday, ISO 8601 date
pub const BIRTHDATE: &str = "birthdate";

/// `zoneinfo` - time zone database name
pub const ZONEINFO: &str = "zoneinfo";

/// `locale` - BCP47 language tag
pub const LOCALE: &str = "locale";

/// `updated_at` - time the profile was last updated, epoch seconds
pub const UPDATED_AT: &str = "updated_at";

/// `email` - preferred email address
pub const EMAIL: &str = "email";

/// `email_verified` - whether the email address has been verified
pub const EMAIL_VERIFIED: &str = "email_verified";

/// `address` - preferred postal address, JSON structure
pub const ADDRESS: &str = "address";

/// `phone_number` - preferred telephone number
pub const PHONE_NUMBER: &str = "phone_number";

/// `phone_number_verified` - whether the phone number has been verified
pub const PHONE_NUMBER_VERIFIED: &str = "phone_number_verified";
