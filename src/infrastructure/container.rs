use std::{env, sync::Arc};

use crate::{
    application::{
        ports::{
            DocumentExtractor, EmbeddingProvider, LegalSearchProvider, LinkChecker, LlmClient,
            PlacesProvider, WebSearchProvider,
        },
        services::{
            ChatAgentService, DocumentIndexerService, FactCheckService, PrecedentFinderService,
            RetrievalService, SummarizerService, TokenService,
        },
        use_cases::{
            ChatUseCase, FindLawyersUseCase, FindPrecedentsUseCase, GetFactHistoryUseCase,
            GetPrecedentsUseCase, LoginUseCase, SignupUseCase, UploadDocumentUseCase,
        },
    },
    domain::repositories::{
        ChatRepository, ChunkRepository, FactCheckRepository, PrecedentRepository, UserRepository,
    },
    infrastructure::{
        database::{
            create_connection_pool, get_connection_from_pool,
            repositories::{
                PostgresChatRepository, PostgresChunkRepository, PostgresFactCheckRepository,
                PostgresPrecedentRepository, PostgresUserRepository,
            },
            run_migrations,
        },
        external_services::{
            CourtListenerSearch, EmbeddingsClient, GeminiClient, GeoapifyPlaces,
            GoogleScholarSearch, HeadLinkChecker, IndianKanoonSearch, PdfExtractor,
            TavilyWebSearch,
        },
    },
    presentation::http::handlers::{
        AuthHandler, ChatHandler, DocumentHandler, FactCheckHandler, LawyerHandler,
        PrecedentHandler,
    },
};

pub struct AppContainer {
    // Repositories
    pub user_repository: Arc<dyn UserRepository>,
    pub chat_repository: Arc<dyn ChatRepository>,
    pub precedent_repository: Arc<dyn PrecedentRepository>,
    pub fact_check_repository: Arc<dyn FactCheckRepository>,
    pub chunk_repository: Arc<dyn ChunkRepository>,

    // External Services
    pub llm_client: Arc<dyn LlmClient>,
    pub embedding_provider: Arc<dyn EmbeddingProvider>,
    pub document_extractor: Arc<dyn DocumentExtractor>,
    pub legal_search: Arc<dyn LegalSearchProvider>,
    pub fallback_search: Arc<dyn LegalSearchProvider>,
    pub web_search: Arc<dyn WebSearchProvider>,
    pub places_provider: Arc<dyn PlacesProvider>,
    pub link_checker: Arc<dyn LinkChecker>,

    // Application Services
    pub token_service: Arc<TokenService>,
    pub retrieval_service: Arc<RetrievalService>,
    pub summarizer: Arc<SummarizerService>,
    pub document_indexer: Arc<DocumentIndexerService>,
    pub chat_agent: Arc<ChatAgentService>,
    pub precedent_finder: Arc<PrecedentFinderService>,
    pub fact_checker: Arc<FactCheckService>,

    // Use Cases
    pub signup_use_case: Arc<SignupUseCase>,
    pub login_use_case: Arc<LoginUseCase>,
    pub upload_document_use_case: Arc<UploadDocumentUseCase>,
    pub chat_use_case: Arc<ChatUseCase>,
    pub find_precedents_use_case: Arc<FindPrecedentsUseCase>,
    pub get_precedents_use_case: Arc<GetPrecedentsUseCase>,
    pub get_fact_history_use_case: Arc<GetFactHistoryUseCase>,
    pub find_lawyers_use_case: Arc<FindLawyersUseCase>,

    // HTTP Handlers
    pub auth_handler: Arc<AuthHandler>,
    pub document_handler: Arc<DocumentHandler>,
    pub chat_handler: Arc<ChatHandler>,
    pub precedent_handler: Arc<PrecedentHandler>,
    pub fact_check_handler: Arc<FactCheckHandler>,
    pub lawyer_handler: Arc<LawyerHandler>,
}

impl AppContainer {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Create database connection pool
        let db_pool = create_connection_pool()?;
        let mut conn = get_connection_from_pool(&db_pool)
            .map_err(|e| format!("Failed to create database connection: {}", e))?;
        run_migrations(&mut conn)
            .map_err(|e| format!("Failed to run database migrations: {}", e))?;
        drop(conn);

        // Create repositories
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(PostgresUserRepository::new(db_pool.clone()));
        let chat_repository: Arc<dyn ChatRepository> =
            Arc::new(PostgresChatRepository::new(db_pool.clone()));
        let precedent_repository: Arc<dyn PrecedentRepository> =
            Arc::new(PostgresPrecedentRepository::new(db_pool.clone()));
        let fact_check_repository: Arc<dyn FactCheckRepository> =
            Arc::new(PostgresFactCheckRepository::new(db_pool.clone()));
        let chunk_repository: Arc<dyn ChunkRepository> =
            Arc::new(PostgresChunkRepository::new(db_pool));

        // Create external services
        let llm_client: Arc<dyn LlmClient> = Arc::new(GeminiClient::from_env()?);
        let embedding_provider: Arc<dyn EmbeddingProvider> =
            Arc::new(EmbeddingsClient::from_env()?);
        let document_extractor: Arc<dyn DocumentExtractor> = Arc::new(PdfExtractor::new());

        // Primary case-law provider is selectable; Google Scholar stays
        // the fallback either way.
        let legal_search: Arc<dyn LegalSearchProvider> =
            match env::var("LEGAL_SEARCH_PROVIDER").as_deref() {
                Ok("courtlistener") => Arc::new(CourtListenerSearch::from_env()),
                _ => Arc::new(IndianKanoonSearch::from_env()),
            };
        let fallback_search: Arc<dyn LegalSearchProvider> =
            Arc::new(GoogleScholarSearch::from_env());
        let web_search: Arc<dyn WebSearchProvider> = Arc::new(TavilyWebSearch::from_env());
        let places_provider: Arc<dyn PlacesProvider> = Arc::new(GeoapifyPlaces::from_env());
        let link_checker: Arc<dyn LinkChecker> = Arc::new(HeadLinkChecker::new());

        // Create application services
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| "JWT_SECRET not set".to_string())?;
        let token_service = Arc::new(TokenService::new(&jwt_secret));

        let retrieval_service = Arc::new(RetrievalService::new(
            embedding_provider.clone(),
            chunk_repository.clone(),
        ));
        let summarizer = Arc::new(SummarizerService::new(llm_client.clone()));
        let document_indexer = Arc::new(DocumentIndexerService::new(
            embedding_provider.clone(),
            chunk_repository.clone(),
        ));
        let chat_agent = Arc::new(ChatAgentService::new(
            llm_client.clone(),
            retrieval_service.clone(),
            legal_search.clone(),
            web_search.clone(),
        ));
        let precedent_finder = Arc::new(PrecedentFinderService::new(
            llm_client.clone(),
            legal_search.clone(),
            fallback_search.clone(),
            link_checker.clone(),
        ));
        let fact_checker = Arc::new(FactCheckService::new(llm_client.clone()));

        // Create use cases
        let signup_use_case = Arc::new(SignupUseCase::new(user_repository.clone()));

        let login_use_case = Arc::new(LoginUseCase::new(
            user_repository.clone(),
            chat_repository.clone(),
            precedent_repository.clone(),
            token_service.clone(),
        ));

        let upload_document_use_case = Arc::new(UploadDocumentUseCase::new(
            user_repository.clone(),
            document_extractor.clone(),
            summarizer.clone(),
            document_indexer.clone(),
        ));

        let chat_use_case = Arc::new(ChatUseCase::new(
            user_repository.clone(),
            chat_repository.clone(),
            fact_check_repository.clone(),
            chat_agent.clone(),
            retrieval_service.clone(),
            fact_checker.clone(),
        ));

        let find_precedents_use_case = Arc::new(FindPrecedentsUseCase::new(
            user_repository.clone(),
            precedent_repository.clone(),
            precedent_finder.clone(),
        ));

        let get_precedents_use_case =
            Arc::new(GetPrecedentsUseCase::new(precedent_repository.clone()));

        let get_fact_history_use_case =
            Arc::new(GetFactHistoryUseCase::new(fact_check_repository.clone()));

        let find_lawyers_use_case = Arc::new(FindLawyersUseCase::new(places_provider.clone()));

        // Create HTTP handlers
        let auth_handler = Arc::new(AuthHandler::new(
            signup_use_case.clone(),
            login_use_case.clone(),
        ));

        let document_handler = Arc::new(DocumentHandler::new(
            upload_document_use_case.clone(),
            token_service.clone(),
        ));

        let chat_handler = Arc::new(ChatHandler::new(
            chat_use_case.clone(),
            token_service.clone(),
        ));

        let precedent_handler = Arc::new(PrecedentHandler::new(
            find_precedents_use_case.clone(),
            get_precedents_use_case.clone(),
            token_service.clone(),
        ));

        let fact_check_handler = Arc::new(FactCheckHandler::new(
            get_fact_history_use_case.clone(),
            token_service.clone(),
        ));

        let lawyer_handler = Arc::new(LawyerHandler::new(find_lawyers_use_case.clone()));

        Ok(Self {
            user_repository,
            chat_repository,
            precedent_repository,
            fact_check_repository,
            chunk_repository,
            llm_client,
            embedding_provider,
            document_extractor,
            legal_search,
            fallback_search,
            web_search,
            places_provider,
            link_checker,
            token_service,
            retrieval_service,
            summarizer,
            document_indexer,
            chat_agent,
            precedent_finder,
            fact_checker,
            signup_use_case,
            login_use_case,
            upload_document_use_case,
            chat_use_case,
            find_precedents_use_case,
            get_precedents_use_case,
            get_fact_history_use_case,
            find_lawyers_use_case,
            auth_handler,
            document_handler,
            chat_handler,
            precedent_handler,
            fact_check_handler,
            lawyer_handler,
        })
    }
}
