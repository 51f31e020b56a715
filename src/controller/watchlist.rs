use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        auth::AuthUser,
        stock::StockDto,
        watchlist::{AddStockDto, CreateWatchlistDto, UpdateWatchlistDto, WatchlistDto},
    },
    service::watchlist::WatchlistService,
};

pub static WATCHLIST_TAG: &str = "watchlist";

/// List the logged in user's watchlists
#[utoipa::path(
    get,
    path = "/api/watchlists",
    tag = WATCHLIST_TAG,
    responses(
        (status = 200, description = "All of the user's watchlists with their stocks", body = Vec<WatchlistDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<WatchlistDto>>, Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    let watchlists = watchlist_service.get_all(user.id).await?;

    Ok(Json(watchlists))
}

/// Create a watchlist
#[utoipa::path(
    post,
    path = "/api/watchlists",
    tag = WATCHLIST_TAG,
    request_body = CreateWatchlistDto,
    responses(
        (status = 201, description = "The created watchlist", body = WatchlistDto),
        (status = 400, description = "Invalid watchlist name", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(dto): Json<CreateWatchlistDto>,
) -> Result<(StatusCode, Json<WatchlistDto>), Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    let watchlist = watchlist_service.create(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(watchlist)))
}

/// Get one of the logged in user's watchlists
#[utoipa::path(
    get,
    path = "/api/watchlists/{id}",
    tag = WATCHLIST_TAG,
    params(
        ("id" = i32, Path, description = "Watchlist ID"),
    ),
    responses(
        (status = 200, description = "The watchlist with its stocks", body = WatchlistDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Watchlist not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_one(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<WatchlistDto>, Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    let watchlist = watchlist_service.get_one(id, user.id).await?;

    Ok(Json(watchlist))
}

/// Update a watchlist's name or description
#[utoipa::path(
    patch,
    path = "/api/watchlists/{id}",
    tag = WATCHLIST_TAG,
    params(
        ("id" = i32, Path, description = "Watchlist ID"),
    ),
    request_body = UpdateWatchlistDto,
    responses(
        (status = 200, description = "The updated watchlist", body = WatchlistDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Watchlist not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateWatchlistDto>,
) -> Result<Json<WatchlistDto>, Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    let watchlist = watchlist_service.update(id, user.id, dto).await?;

    Ok(Json(watchlist))
}

/// Delete a watchlist
#[utoipa::path(
    delete,
    path = "/api/watchlists/{id}",
    tag = WATCHLIST_TAG,
    params(
        ("id" = i32, Path, description = "Watchlist ID"),
    ),
    responses(
        (status = 204, description = "The watchlist was deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Watchlist not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    watchlist_service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the stocks on a watchlist
#[utoipa::path(
    get,
    path = "/api/watchlists/{id}/stocks",
    tag = WATCHLIST_TAG,
    params(
        ("id" = i32, Path, description = "Watchlist ID"),
    ),
    responses(
        (status = 200, description = "The watchlist's stocks", body = Vec<StockDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Watchlist not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_stocks(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Vec<StockDto>>, Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    let stocks = watchlist_service.get_stocks(id, user.id).await?;

    Ok(Json(stocks.into_iter().map(StockDto::from).collect()))
}

/// Add a stock to a watchlist by symbol
///
/// Adding a symbol already on the list is a no-op reported in the message.
#[utoipa::path(
    post,
    path = "/api/watchlists/{id}/stocks",
    tag = WATCHLIST_TAG,
    params(
        ("id" = i32, Path, description = "Watchlist ID"),
    ),
    request_body = AddStockDto,
    responses(
        (status = 200, description = "Whether the stock was added or already present", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Watchlist not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn add_stock(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(dto): Json<AddStockDto>,
) -> Result<Json<MessageDto>, Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    let message = watchlist_service.add_stock(id, user.id, &dto.symbol).await?;

    Ok(Json(MessageDto { message }))
}

/// Remove a stock from a watchlist by symbol
#[utoipa::path(
    delete,
    path = "/api/watchlists/{id}/stocks/{symbol}",
    tag = WATCHLIST_TAG,
    params(
        ("id" = i32, Path, description = "Watchlist ID"),
        ("symbol" = String, Path, description = "Ticker symbol to remove"),
    ),
    responses(
        (status = 200, description = "The stock was removed", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Watchlist or stock not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn remove_stock(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id, symbol)): Path<(i32, String)>,
) -> Result<Json<MessageDto>, Error> {
    let watchlist_service = WatchlistService::new(&state.db, &state.market);

    let message = watchlist_service.remove_stock(id, user.id, &symbol).await?;

    Ok(Json(MessageDto { message }))
}
