//! Database repository for shops.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::shops::{ShopCreateDBRequest, ShopDBResponse, ShopUpdateDBRequest},
};
use crate::types::{abbrev_uuid, ShopId, UserId};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct Shop {
    pub id: ShopId,
    pub name: String,
    pub owner_name: String,
    pub inventory: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Shop> for ShopDBResponse {
    fn from(s: Shop) -> Self {
        Self {
            id: s.id,
            name: s.name,
            owner_name: s.owner_name,
            inventory: s.inventory,
            created_by: s.created_by,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

pub struct Shops<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Shops<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Shops<'c> {
    type CreateRequest = ShopCreateDBRequest;
    type UpdateRequest = ShopUpdateDBRequest;
    type Response = ShopDBResponse;
    type Id = ShopId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let shop = sqlx::query_as::<_, Shop>(
            r#"
            INSERT INTO shops (id, name, owner_name, inventory, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.owner_name)
        .bind(&request.inventory)
        .bind(request.created_by)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(ShopDBResponse::from(shop))
    }

    #[instrument(skip(self), fields(shop_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let shop = sqlx::query_as::<_, Shop>("SELECT * FROM shops WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(shop.map(ShopDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let shops = sqlx::query_as::<_, Shop>("SELECT * FROM shops ORDER BY created_at")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(shops.into_iter().map(ShopDBResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(shop_id = %abbrev_uuid(&id)), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let shop = sqlx::query_as::<_, Shop>(
            r#"
            UPDATE shops SET
                name = $2,
                owner_name = $3,
                inventory = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.owner_name)
        .bind(&request.inventory)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(ShopDBResponse::from(shop))
    }

    #[instrument(skip(self), fields(shop_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM shops WHERE id = $1").bind(id).execute(&mut *self.db).await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::Users;
    use crate::db::models::users::UserCreateDBRequest;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_shop_crud(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let owner = Users::new(&mut conn)
            .create(&UserCreateDBRequest {
                username: "shop_owner".to_string(),
                email: "shop_owner@example.com".to_string(),
                password_hash: "$argon2id$fake$hash".to_string(),
                avatar_path: None,
            })
            .await
            .unwrap()
            .id;

        let mut repo = Shops::new(&mut conn);
        let created = repo
            .create(&ShopCreateDBRequest {
                name: "The Gilded Flagon".to_string(),
                owner_name: "Durnan".to_string(),
                inventory: "longsword (15 gp), healing potion (50 gp)".to_string(),
                created_by: owner,
            })
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.owner_name, "Durnan");

        let updated = repo
            .update(
                created.id,
                &ShopUpdateDBRequest {
                    name: "The Gilded Flagon".to_string(),
                    owner_name: "Bonnie".to_string(),
                    inventory: "shortbow (25 gp)".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.owner_name, "Bonnie");
        assert_eq!(updated.inventory, "shortbow (25 gp)");

        assert!(repo.delete(created.id).await.unwrap());
        let err = repo.update(created.id, &ShopUpdateDBRequest {
            name: "x".to_string(),
            owner_name: "y".to_string(),
            inventory: "z".to_string(),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }
}
