use utoipa::OpenApi;

use crate::modules::accounts::model::{Account, CreateAccountDto, UpdateAccountDto};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::SignInRequest;
use crate::modules::images::model::{CreateImageDto, Image, UpdateImageDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::accounts::controller::create_account,
        crate::modules::accounts::controller::list_accounts,
        crate::modules::accounts::controller::update_account,
        crate::modules::accounts::controller::delete_account,
        crate::modules::images::controller::create_image,
        crate::modules::images::controller::list_images,
        crate::modules::images::controller::update_image,
        crate::modules::images::controller::delete_image,
        crate::modules::auth::controller::sign_in,
        crate::modules::auth::controller::welcome,
        crate::modules::auth::controller::refresh,
    ),
    components(schemas(
        Account,
        CreateAccountDto,
        UpdateAccountDto,
        Image,
        CreateImageDto,
        UpdateImageDto,
        SignInRequest,
        ErrorResponse,
    )),
    tags(
        (name = "Accounts", description = "Account management"),
        (name = "Images", description = "Image management"),
        (name = "Auth", description = "Sign-in and session-token lifecycle")
    ),
    info(
        title = "Snapvault API",
        description = "REST API for image and account management with cookie-based session tokens"
    )
)]
pub struct ApiDoc;
