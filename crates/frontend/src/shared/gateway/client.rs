use super::{ApiRequest, CredentialProvider, GatewayError, Method, Transport};
use contracts::domain::common::{Resource, UpdateRoute};
use contracts::shared::pagination::{ListQuery, Page};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::rc::Rc;

/// Authenticated JSON calls against one gateway base URL
pub struct Gateway {
    base_url: String,
    transport: Rc<dyn Transport>,
    credentials: Rc<dyn CredentialProvider>,
}

impl Gateway {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        credentials: Rc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            credentials,
        }
    }

    fn authorization(&self) -> Result<String, GatewayError> {
        self.credentials
            .access_token()
            .filter(|t| !t.trim().is_empty())
            .map(|t| format!("Bearer {}", t.trim()))
            .ok_or(GatewayError::NotAuthenticated)
    }

    /// Send one request and decode the JSON body. An empty body decodes
    /// as `null`.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        let authorization = self.authorization()?;
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            query,
            authorization,
            body,
        };
        log::debug!("{} {}", method.as_str(), path);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        if !response.is_success() {
            let err = GatewayError::from_status(response.status, &response.body);
            log::warn!("{} {}: {}", method.as_str(), path, err);
            return Err(err);
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Typed client for one gateway resource, routed by its descriptor
pub struct ResourceClient<R: Resource> {
    gateway: Rc<Gateway>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(gateway: Rc<Gateway>) -> Self {
        Self {
            gateway,
            _resource: PhantomData,
        }
    }

    /// `GET {collection}?page&limit&{filter}`
    pub async fn list(&self, query: &ListQuery) -> Result<Page<R::Row>, GatewayError> {
        let d = R::DESCRIPTOR;
        let value = self
            .gateway
            .call(Method::Get, d.collection, query.to_params(d.filter_param), None)
            .await?;
        decode(value)
    }

    /// Total record count reported by a one-item list call
    pub async fn count(&self) -> Result<Option<u64>, GatewayError> {
        let d = R::DESCRIPTOR;
        let query = ListQuery::new(1, 1, "");
        let value = self
            .gateway
            .call(Method::Get, d.collection, query.to_params(d.filter_param), None)
            .await?;
        let page: Page<Value> = decode(value)?;
        Ok(page.pagination.total)
    }

    /// Full record for the edit dialog
    pub async fn get(&self, id: &str) -> Result<R, GatewayError> {
        self.get_as(id).await
    }

    /// Detail record decoded as `T`, unwrapping the descriptor's envelope.
    /// A 404 or a `null` record is [`GatewayError::NotFound`].
    pub async fn get_as<T: DeserializeOwned>(&self, id: &str) -> Result<T, GatewayError> {
        let d = R::DESCRIPTOR;
        let value = match self
            .gateway
            .call(Method::Get, &d.detail_path(&encode_id(id)), Vec::new(), None)
            .await
        {
            Err(GatewayError::Status { status: 404, .. }) => return Err(GatewayError::NotFound),
            other => other?,
        };
        let record = match d.detail_envelope {
            Some(key) => value.get(key).cloned().unwrap_or(Value::Null),
            None => value,
        };
        if record.is_null() {
            return Err(GatewayError::NotFound);
        }
        decode(record)
    }

    /// `POST {create}` with no identifier in the body
    pub async fn create(&self, mut body: Map<String, Value>) -> Result<Value, GatewayError> {
        let d = R::DESCRIPTOR;
        let path = d.create.ok_or_else(|| GatewayError::Status {
            status: 405,
            message: Some(format!("{} records cannot be created here", d.element_name)),
        })?;
        body.remove("id");
        self.gateway
            .call(Method::Post, path, Vec::new(), Some(Value::Object(body)))
            .await
    }

    /// `PUT` by id, or to the profile-style endpoint with the id in the body
    pub async fn update(&self, id: &str, mut body: Map<String, Value>) -> Result<Value, GatewayError> {
        let d = R::DESCRIPTOR;
        let path = match d.update {
            UpdateRoute::ById => {
                body.remove("id");
                d.update_path(&encode_id(id))
            }
            UpdateRoute::IdInBody(_) => {
                body.insert("id".to_string(), Value::String(id.to_string()));
                d.update_path(id)
            }
        };
        self.gateway
            .call(Method::Put, &path, Vec::new(), Some(Value::Object(body)))
            .await
    }

    /// Update carrying only the descriptor's status field
    pub async fn update_status(&self, id: &str, value: &str) -> Result<Value, GatewayError> {
        let d = R::DESCRIPTOR;
        let field = d.status.ok_or_else(|| GatewayError::Status {
            status: 405,
            message: Some(format!("{} has no status", d.element_name)),
        })?;
        let mut body = Map::new();
        body.insert(field.name.to_string(), Value::String(value.to_string()));
        self.update(id, body).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let d = R::DESCRIPTOR;
        if !d.deletable {
            return Err(GatewayError::Status {
                status: 405,
                message: Some(format!("{} records cannot be deleted", d.element_name)),
            });
        }
        self.gateway
            .call(Method::Delete, &d.delete_path(&encode_id(id)), Vec::new(), None)
            .await?;
        Ok(())
    }
}
