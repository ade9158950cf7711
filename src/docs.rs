use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::list_movies_by_genre,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            crate::common::response::ApiResponse,
            crate::modules::genre::dto::GenreDto,
            crate::modules::genre::model::Genre,
            crate::modules::movie::dto::MovieDetailsDto,
            crate::modules::movie::dto::MovieFormBody,
            crate::modules::movie::model::Movie,
        )
    ),
    tags(
        (name = "Genres", description = "Genre catalog"),
        (name = "Movies", description = "Movie catalog with poster uploads")
    )
)]
pub struct ApiDoc;
