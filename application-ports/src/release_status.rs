use async_trait::async_trait;

#[async_trait]
pub trait ReleaseStatusPort {
    async fn get_release_status(&self) -> ReleaseStatusDto;
}

pub struct ReleaseStatusDto {
    pub released: bool,
    pub status_text: String,
    /// `None` when the image could not be rendered.
    pub image: Option<CountdownImageDto>,
}

pub struct CountdownImageDto {
    pub content: Vec<u8>,
    pub filename: String,
}
