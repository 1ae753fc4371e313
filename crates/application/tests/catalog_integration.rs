//! End-to-end use case tests over the in-memory gateways.

use std::sync::Arc;

use application::UseCase;
use application::cast_member::{
    CreateCastMemberCommand, CreateCastMemberUseCase, GetCastMemberUseCase,
    ListCastMembersUseCase,
};
use application::category::{
    CreateCategoryCommand, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase,
    ListCategoriesUseCase, UpdateCategoryCommand, UpdateCategoryUseCase,
};
use application::genre::{
    CreateGenreCommand, CreateGenreUseCase, DeleteGenreUseCase, GetGenreUseCase,
    ListGenresUseCase, UpdateGenreCommand, UpdateGenreUseCase,
};
use common::{Direction, SearchQuery};
use domain::CastMemberType;
use infrastructure::{InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway};

struct Catalog {
    categories: InMemoryCategoryGateway,
    genres: InMemoryGenreGateway,
    members: InMemoryCastMemberGateway,
}

impl Catalog {
    fn new() -> Self {
        let genres = InMemoryGenreGateway::new();
        Self {
            categories: InMemoryCategoryGateway::with_genres(genres.clone()),
            genres,
            members: InMemoryCastMemberGateway::new(),
        }
    }

    async fn create_category(&self, name: &str) -> String {
        CreateCategoryUseCase::new(Arc::new(self.categories.clone()))
            .execute(CreateCategoryCommand::new(name, None, true))
            .await
            .unwrap()
            .id
    }

    fn create_genre(&self) -> CreateGenreUseCase {
        CreateGenreUseCase::new(
            Arc::new(self.categories.clone()),
            Arc::new(self.genres.clone()),
        )
    }

    fn update_genre(&self) -> UpdateGenreUseCase {
        UpdateGenreUseCase::new(
            Arc::new(self.categories.clone()),
            Arc::new(self.genres.clone()),
        )
    }
}

mod categories {
    use super::*;

    #[tokio::test]
    async fn create_then_read_back() {
        let catalog = Catalog::new();
        let created = CreateCategoryUseCase::new(Arc::new(catalog.categories.clone()))
            .execute(CreateCategoryCommand::new(
                "Filmes",
                Some("desc".into()),
                true,
            ))
            .await
            .unwrap();

        let output = GetCategoryUseCase::new(Arc::new(catalog.categories.clone()))
            .execute(created.id.clone())
            .await
            .unwrap();

        assert_eq!(output.id, created.id);
        assert_eq!(output.name, "Filmes");
        assert_eq!(output.description.as_deref(), Some("desc"));
        assert!(output.is_active);
        assert!(output.deleted_at.is_none());
        assert_eq!(output.created_at, output.updated_at);
    }

    #[tokio::test]
    async fn repeated_invalid_update_reports_same_errors() {
        let catalog = Catalog::new();
        let id = catalog.create_category("Movies").await;
        let update = UpdateCategoryUseCase::new(Arc::new(catalog.categories.clone()));

        let first = update
            .execute(UpdateCategoryCommand::new(&id, "ab", None, true))
            .await
            .unwrap_err();
        let second = update
            .execute(UpdateCategoryCommand::new(&id, "ab", None, true))
            .await
            .unwrap_err();

        assert_eq!(first.errors(), second.errors());
        assert_eq!(first.to_string(), second.to_string());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_leaves_store_untouched() {
        let catalog = Catalog::new();
        let id = catalog.create_category("Movies").await;

        DeleteCategoryUseCase::new(Arc::new(catalog.categories.clone()))
            .execute("does-not-exist".to_string())
            .await
            .unwrap();

        let output = GetCategoryUseCase::new(Arc::new(catalog.categories.clone()))
            .execute(id)
            .await
            .unwrap();
        assert_eq!(output.name, "Movies");
        assert_eq!(catalog.categories.count().await, 1);
    }

    #[tokio::test]
    async fn list_searches_name_and_description() {
        let catalog = Catalog::new();
        let create = CreateCategoryUseCase::new(Arc::new(catalog.categories.clone()));
        create
            .execute(CreateCategoryCommand::new("Movies", Some("Long form".into()), true))
            .await
            .unwrap();
        create
            .execute(CreateCategoryCommand::new("Shorts", None, true))
            .await
            .unwrap();
        create
            .execute(CreateCategoryCommand::new("Longplay", None, true))
            .await
            .unwrap();

        let page = ListCategoriesUseCase::new(Arc::new(catalog.categories.clone()))
            .execute(SearchQuery::new(0, 10, "LONG", "name", Direction::Asc))
            .await
            .unwrap();

        let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(page.total, 2);
        assert_eq!(names, ["Longplay", "Movies"]);
    }
}

mod genres {
    use super::*;

    #[tokio::test]
    async fn rejects_unknown_categories_and_persists_nothing() {
        let catalog = Catalog::new();

        let err = catalog
            .create_genre()
            .execute(CreateGenreCommand::new(
                "Ação",
                true,
                vec!["missing-1".into(), "missing-2".into()],
            ))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.errors()[0].message(),
            "Some categories could not be found: missing-1,missing-2"
        );
        assert_eq!(catalog.genres.count().await, 0);
    }

    #[tokio::test]
    async fn partial_existence_lists_only_missing_ids() {
        let catalog = Catalog::new();
        let known = catalog.create_category("Movies").await;

        let err = catalog
            .create_genre()
            .execute(CreateGenreCommand::new(
                "",
                true,
                vec![known, "2".into(), "3".into()],
            ))
            .await
            .unwrap_err();

        let messages: Vec<_> = err.errors().iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            [
                "Some categories could not be found: 2,3",
                "'name' should not be empty"
            ]
        );
    }

    #[tokio::test]
    async fn full_lifecycle() {
        let catalog = Catalog::new();
        let movies = catalog.create_category("Movies").await;
        let series = catalog.create_category("Series").await;

        let created = catalog
            .create_genre()
            .execute(CreateGenreCommand::new("Action", true, vec![movies.clone()]))
            .await
            .unwrap();

        catalog
            .update_genre()
            .execute(UpdateGenreCommand::new(
                &created.id,
                "Action & Adventure",
                false,
                vec![series.clone(), movies.clone()],
            ))
            .await
            .unwrap();

        let output = GetGenreUseCase::new(Arc::new(catalog.genres.clone()))
            .execute(created.id.clone())
            .await
            .unwrap();
        assert_eq!(output.name, "Action & Adventure");
        assert!(!output.is_active);
        assert!(output.deleted_at.is_some());
        assert_eq!(output.categories, vec![series, movies]);

        let page = ListGenresUseCase::new(Arc::new(catalog.genres.clone()))
            .execute(SearchQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, created.id);

        DeleteGenreUseCase::new(Arc::new(catalog.genres.clone()))
            .execute(created.id.clone())
            .await
            .unwrap();
        let err = GetGenreUseCase::new(Arc::new(catalog.genres.clone()))
            .execute(created.id.clone())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn deleting_a_category_unlinks_it() {
        let catalog = Catalog::new();
        let movies = catalog.create_category("Movies").await;
        let series = catalog.create_category("Series").await;
        let created = catalog
            .create_genre()
            .execute(CreateGenreCommand::new(
                "Action",
                true,
                vec![movies.clone(), series.clone()],
            ))
            .await
            .unwrap();

        DeleteCategoryUseCase::new(Arc::new(catalog.categories.clone()))
            .execute(movies)
            .await
            .unwrap();

        let output = GetGenreUseCase::new(Arc::new(catalog.genres.clone()))
            .execute(created.id)
            .await
            .unwrap();
        assert_eq!(output.categories, vec![series]);
    }
}

mod cast_members {
    use super::*;

    #[tokio::test]
    async fn create_list_and_get() {
        let catalog = Catalog::new();
        let create = CreateCastMemberUseCase::new(Arc::new(catalog.members.clone()));

        let keanu = create
            .execute(CreateCastMemberCommand::new(
                "Keanu Reeves",
                Some(CastMemberType::Actor),
            ))
            .await
            .unwrap();
        create
            .execute(CreateCastMemberCommand::new(
                "Lana Wachowski",
                Some(CastMemberType::Director),
            ))
            .await
            .unwrap();

        let page = ListCastMembersUseCase::new(Arc::new(catalog.members.clone()))
            .execute(SearchQuery::new(0, 10, "keanu", "name", Direction::Asc))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, keanu.id);

        let output = GetCastMemberUseCase::new(Arc::new(catalog.members.clone()))
            .execute(keanu.id)
            .await
            .unwrap();
        assert_eq!(output.kind, Some(CastMemberType::Actor));
    }
}
