use deadpool_postgres::Pool;
use like_me_api::modules::post::post_dtos::PostDTO;

const CREATE_POSTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS posts (
    id SERIAL PRIMARY KEY,
    titulo VARCHAR(255) NOT NULL,
    img VARCHAR(1000) NOT NULL,
    descripcion VARCHAR(1000) NOT NULL,
    likes INT NOT NULL DEFAULT 0 CHECK (likes >= 0)
)";

/// Direct access to the `posts` table, bypassing the repository under test.
pub struct FunctionalTester {}

impl FunctionalTester {
    pub async fn ensure_posts_table(pool: &Pool) {
        let client = pool.get().await.unwrap();
        client.batch_execute(CREATE_POSTS_TABLE).await.unwrap();
    }

    pub async fn find_post(pool: &Pool, id: i32) -> Option<PostDTO> {
        let client = pool.get().await.unwrap();
        let stmt = client
            .prepare("SELECT id, titulo, img, descripcion, likes FROM posts WHERE id = $1")
            .await
            .unwrap();
        let rows = client.query(&stmt, &[&id]).await.unwrap();
        rows.first().map(|row| PostDTO::try_from(row).unwrap())
    }

    pub async fn can_see_in_database(pool: &Pool, id: i32) -> bool {
        Self::find_post(pool, id).await.is_some()
    }

    pub async fn cant_see_in_database(pool: &Pool, id: i32) -> bool {
        Self::find_post(pool, id).await.is_none()
    }

    pub async fn delete_from_database(pool: &Pool, id: i32) {
        let client = pool.get().await.unwrap();
        client
            .execute("DELETE FROM posts WHERE id = $1", &[&id])
            .await
            .unwrap();
    }
}
