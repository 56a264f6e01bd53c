//! Item request service.
//!
//! Users post requests for items nobody has listed; owners fulfill a request
//! by creating an item that references it. Request views carry the list of
//! fulfilling items.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{item::ItemRepository, request::RequestRepository, user::UserRepository},
    error::AppError,
    model::request::{CreateRequestDto, RequestDto, RequestedItemDto},
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item request.
    ///
    /// # Returns
    /// - `Ok(RequestDto)` - The created request with a server-assigned
    ///   creation time and an empty item list
    /// - `Err(AppError::NotFound)` - Requester missing
    /// - `Err(AppError::Validation)` - Blank description
    pub async fn create(
        &self,
        requester_id: i32,
        dto: CreateRequestDto,
    ) -> Result<RequestDto, AppError> {
        let requester = self.require_user(requester_id).await?;

        let description = dto.description.trim().to_string();
        if description.is_empty() {
            return Err(AppError::Validation(
                "Request description must not be blank".to_string(),
            ));
        }

        let request = RequestRepository::new(self.db)
            .create(requester.id, description, Utc::now())
            .await?;

        Ok(RequestDto {
            id: request.id,
            description: request.description,
            created: request.created,
            items: Vec::new(),
        })
    }

    /// Gets all requests posted by the user, newest first, each with its
    /// fulfilling items.
    pub async fn get_own(&self, user_id: i32) -> Result<Vec<RequestDto>, AppError> {
        self.require_user(user_id).await?;

        let requests = RequestRepository::new(self.db)
            .find_by_requester(user_id)
            .await?;

        self.to_dtos(requests).await
    }

    /// Gets a page of all other users' requests, newest first, each with its
    /// fulfilling items.
    ///
    /// # Arguments
    /// - `user_id` - ID of the requesting user, whose own requests are excluded
    /// - `from` - Number of requests to skip (must be non-negative)
    /// - `size` - Page size (must be positive)
    pub async fn get_all(
        &self,
        user_id: i32,
        from: i64,
        size: i64,
    ) -> Result<Vec<RequestDto>, AppError> {
        let (offset, limit) = super::to_page(from, size)?;
        self.require_user(user_id).await?;

        let requests = RequestRepository::new(self.db)
            .find_others(user_id, offset, limit)
            .await?;

        self.to_dtos(requests).await
    }

    /// Gets one request with its fulfilling items. Any existing user may look
    /// at any request.
    ///
    /// # Returns
    /// - `Ok(RequestDto)` - The request
    /// - `Err(AppError::NotFound)` - Requesting user or request missing
    pub async fn get_by_id(&self, request_id: i32, user_id: i32) -> Result<RequestDto, AppError> {
        self.require_user(user_id).await?;

        let request = RequestRepository::new(self.db)
            .get_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("ItemRequest not found".to_string()))?;

        let items = ItemRepository::new(self.db)
            .find_by_request(request.id)
            .await?
            .into_iter()
            .map(RequestedItemDto::from)
            .collect();

        Ok(RequestDto {
            id: request.id,
            description: request.description,
            created: request.created,
            items,
        })
    }

    async fn require_user(&self, user_id: i32) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Maps requests to DTOs, batch-fetching the items that fulfill them.
    async fn to_dtos(
        &self,
        requests: Vec<entity::item_request::Model>,
    ) -> Result<Vec<RequestDto>, AppError> {
        let request_ids: Vec<i32> = requests.iter().map(|r| r.id).collect();

        let mut items_by_request: HashMap<i32, Vec<RequestedItemDto>> = HashMap::new();
        for item in ItemRepository::new(self.db)
            .find_by_requests(request_ids)
            .await?
        {
            if let Some(request_id) = item.request_id {
                items_by_request
                    .entry(request_id)
                    .or_default()
                    .push(item.into());
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| RequestDto {
                items: items_by_request.remove(&request.id).unwrap_or_default(),
                id: request.id,
                description: request.description,
                created: request.created,
            })
            .collect())
    }
}
