use entity::{answered_question, game_progress, question, user};
use sea_orm::{
    sea_query::Index, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, Schema,
};
use tracing::info;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(uri);
        opts.sqlx_logging(false);
        if uri.starts_with("sqlite") {
            // one writer; also keeps an in-memory database alive on a single connection
            opts.max_connections(1).min_connections(1);
        }

        info!("Connecting to database...");
        let database_connection = Database::connect(opts).await?;
        info!("Connected to {:?} database.", database_connection.get_database_backend());

        let service = Self { database_connection };
        service.create_schema().await?;
        Ok(service)
    }

    /// Creates any missing tables from the entity definitions.
    async fn create_schema(&self) -> Result<(), DbErr> {
        info!("Ensuring schema...");
        let db = &self.database_connection;
        let backend = db.get_database_backend();
        let schema = Schema::new(backend);

        // parents before children for the foreign keys
        self.create_table(&schema, user::Entity).await?;
        self.create_table(&schema, question::Entity).await?;
        self.create_table(&schema, game_progress::Entity).await?;
        self.create_table(&schema, answered_question::Entity).await?;

        let one_answer_per_question = Index::create()
            .name("idx_answered_questions_user_question")
            .table(answered_question::Entity)
            .col(answered_question::Column::UserId)
            .col(answered_question::Column::QuestionId)
            .unique()
            .if_not_exists()
            .to_owned();
        db.execute(backend.build(&one_answer_per_question)).await?;

        info!("Schema ready.");
        Ok(())
    }

    async fn create_table<E: EntityTrait>(&self, schema: &Schema, entity: E) -> Result<(), DbErr> {
        let backend = self.database_connection.get_database_backend();
        let mut stmt = schema.create_table_from_entity(entity);
        stmt.if_not_exists();
        self.database_connection.execute(backend.build(&stmt)).await?;
        Ok(())
    }
}
