use super::error::ApiError;

/// Cabecera con el token de sesión que esperan todos los endpoints autenticados.
pub const AUTH_HEADER: &str = "X-Auth-Token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub token: Option<String>,
    pub body: Option<String>, // JSON ya serializado
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub type Reply = Box<dyn FnOnce(Result<HttpResponse, ApiError>) + Send + 'static>;

/// Ejecuta una petición sin bloquear el hilo de la UI y entrega el
/// resultado a `reply` cuando termine.
pub trait Transport {
    fn dispatch(&self, request: HttpRequest, reply: Reply);
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|err| {
                log::warn!(
                    "No se pudo configurar el cliente HTTP ({err}); se usan valores por defecto"
                );
                reqwest::blocking::Client::new()
            });
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for ReqwestTransport {
    fn dispatch(&self, request: HttpRequest, reply: Reply) {
        let client = self.client.clone();
        // Un hilo por petición: no se cancelan ni se ordenan entre sí
        std::thread::spawn(move || reply(send_blocking(&client, &request)));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn send_blocking(
    client: &reqwest::blocking::Client,
    request: &HttpRequest,
) -> Result<HttpResponse, ApiError> {
    log::debug!("{} {}", request.method.as_str(), request.url);

    let mut builder = match request.method {
        Method::Get => client.get(&request.url),
        Method::Post => client.post(&request.url),
        Method::Delete => client.delete(&request.url),
    };
    if let Some(token) = &request.token {
        builder = builder.header(AUTH_HEADER, token);
    }
    if let Some(body) = &request.body {
        builder = builder
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.clone());
    }

    let response = builder
        .send()
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|err| ApiError::Network(format!("No se pudo leer el body: {err}")))?;

    Ok(HttpResponse { status, body })
}

#[cfg(target_arch = "wasm32")]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
impl Transport for FetchTransport {
    fn dispatch(&self, request: HttpRequest, reply: Reply) {
        wasm_bindgen_futures::spawn_local(async move {
            reply(fetch(&request).await);
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    log::debug!("{} {}", request.method.as_str(), request.url);

    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let window = web_sys::window()
        .ok_or_else(|| ApiError::Network("No existe window en entorno WASM.".into()))?;

    let js_request = Request::new_with_str_and_init(&request.url, &opts)
        .map_err(|err| ApiError::Network(format!("No se pudo crear request fetch: {err:?}")))?;

    let headers = js_request.headers();
    if request.body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(|err| ApiError::Network(format!("No se pudo asignar headers: {err:?}")))?;
    }
    if let Some(token) = &request.token {
        headers
            .set(AUTH_HEADER, token)
            .map_err(|err| ApiError::Network(format!("No se pudo asignar headers: {err:?}")))?;
    }

    let resp_value = JsFuture::from(window.fetch_with_request(&js_request))
        .await
        .map_err(|err| ApiError::Network(format!("Fetch falló: {err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("La respuesta fetch no es un Response válido.".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| ApiError::Network(format!("No se pudo leer el body: {err:?}")))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|err| ApiError::Network(format!("No se pudo leer el body: {err:?}")))?
        .as_string()
        .unwrap_or_default();

    Ok(HttpResponse {
        status: response.status(),
        body,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_transport() -> Box<dyn Transport> {
    Box::new(ReqwestTransport::new())
}

#[cfg(target_arch = "wasm32")]
pub fn platform_transport() -> Box<dyn Transport> {
    Box::new(FetchTransport)
}
