use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::frames::handler::extract_frames,
    ),
    components(
        schemas(
            crate::modules::frames::dto::ExtractFramesRequest,
            crate::modules::frames::dto::ExtractFramesResponse,
            crate::common::response::InvocationResponse,
        )
    ),
    tags(
        (name = "Frames", description = "Video frame extraction jobs")
    )
)]
pub struct ApiDoc;
