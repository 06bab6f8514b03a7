//! Form payloads and their extractor.

use axum::{
    extract::{FromRequest, Request},
    Form,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::cart::ItemId;
use crate::http::response::ApiError;

/// Body of `POST /api/updatecomment`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentForm {
    pub itemnumber: i64,
    #[serde(default)]
    pub comment: String,
    /// Identifier the client saw at `itemnumber`, if it sent one.
    #[serde(default)]
    pub itemid: Option<String>,
}

/// Body of `POST /api/delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteItemForm {
    pub itemnumber: i64,
    #[serde(default)]
    pub itemid: Option<String>,
}

impl UpdateCommentForm {
    pub fn expected_id(&self) -> Option<ItemId> {
        expected(&self.itemid)
    }
}

impl DeleteItemForm {
    pub fn expected_id(&self) -> Option<ItemId> {
        expected(&self.itemid)
    }
}

fn expected(itemid: &Option<String>) -> Option<ItemId> {
    itemid
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| ItemId::from(s.to_string()))
}

// Decode targets must be deserializable; a wrong shape fails the build.
const _: fn() = || {
    fn assert_form_target<T: DeserializeOwned + Send>() {}
    assert_form_target::<UpdateCommentForm>();
    assert_form_target::<DeleteItemForm>();
};

/// URL-encoded form extractor whose every rejection is a 400.
#[derive(Debug, Clone)]
pub struct CartForm<T>(pub T);

impl<S, T> FromRequest<S> for CartForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn decode<T: DeserializeOwned + Send>(body: &str) -> Result<T, ApiError> {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        CartForm::<T>::from_request(req, &()).await.map(|f| f.0)
    }

    #[tokio::test]
    async fn test_blank_itemid_is_ignored() {
        let form: DeleteItemForm = decode("itemnumber=2&itemid=+").await.unwrap();
        assert_eq!(form.itemnumber, 2);
        assert!(form.expected_id().is_none());

        let form: UpdateCommentForm = decode("itemnumber=0&itemid=ABCD1234").await.unwrap();
        assert_eq!(form.comment, "");
        assert_eq!(form.expected_id().unwrap().as_str(), "ABCD1234");
    }

    #[tokio::test]
    async fn test_decode_failures_are_decode_errors() {
        for body in ["itemnumber=abc", "comment=hi", "itemnumber=1.5", "itemnumber="] {
            let err = decode::<UpdateCommentForm>(body).await.unwrap_err();
            assert!(matches!(err, ApiError::Decode(_)), "{body}");
        }
    }

    #[tokio::test]
    async fn test_negative_position_decodes() {
        let form: DeleteItemForm = decode("itemnumber=-1").await.unwrap();
        assert_eq!(form.itemnumber, -1);
    }
}
