//! Request validation
//!
//! Wire shapes live in `kernel::contract::user`; this module turns them into
//! validated commands, collecting every failing field.

use kernel::contract::user::{CreateUserRequest, UserLookup};
use kernel::id::UserId;
use kernel::validation::{ValidationErrors, Validator};

use crate::application::SignupCommand;
use crate::domain::repository::UserCriteria;
use crate::domain::value_object::{Email, UserName, WalletAddress};

/// Validate a `POST /user` body
pub fn signup_command(req: CreateUserRequest) -> Result<SignupCommand, ValidationErrors> {
    let mut v = Validator::new();

    let address = v.field("address", WalletAddress::parse(&req.address));
    let user_name = v.field("userName", UserName::new(&req.user_name));
    let email = match req.email.as_deref() {
        Some(email) => v.field("email", Email::new(email)).map(Some),
        None => Some(None),
    };

    v.finish()?;
    // Every `None` above has already recorded a reason
    let (Some(address), Some(user_name), Some(email)) = (address, user_name, email) else {
        return Err(ValidationErrors::default());
    };

    Ok(SignupCommand {
        address,
        user_name,
        email,
        first_name: non_blank(req.first_name),
        last_name: non_blank(req.last_name),
    })
}

/// Validate a `GET /user` query
pub fn user_criteria(lookup: UserLookup) -> Result<UserCriteria, ValidationErrors> {
    let mut v = Validator::new();
    v.ensure(
        lookup.id.is_some() || lookup.address.is_some(),
        "id or address is required",
    );

    let address = match lookup.address.as_deref() {
        Some(address) => v.field("address", WalletAddress::parse(address)),
        None => None,
    };

    v.finish()?;
    Ok(UserCriteria {
        id: lookup.id.map(UserId::from_uuid),
        address,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
