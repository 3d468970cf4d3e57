//! Transporte de pruebas: responde en línea y guarda las peticiones.

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Reply, Transport};
use std::cell::RefCell;
use std::rc::Rc;

pub type RequestLog = Rc<RefCell<Vec<HttpRequest>>>;

type Responder = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, ApiError>>;

pub struct MockTransport {
    responder: Responder,
    log: RequestLog,
}

impl MockTransport {
    pub fn new(
        responder: impl Fn(&HttpRequest) -> Result<HttpResponse, ApiError> + 'static,
    ) -> (Self, RequestLog) {
        let log = RequestLog::default();
        let mock = Self {
            responder: Box::new(responder),
            log: log.clone(),
        };
        (mock, log)
    }

    /// Misma respuesta para todas las peticiones.
    pub fn replying(status: u16, body: &str) -> (Self, RequestLog) {
        let body = body.to_string();
        Self::new(move |_| {
            Ok(HttpResponse {
                status,
                body: body.clone(),
            })
        })
    }

    pub fn failing(reason: &str) -> (Self, RequestLog) {
        let reason = reason.to_string();
        Self::new(move |_| Err(ApiError::Network(reason.clone())))
    }
}

impl Transport for MockTransport {
    fn dispatch(&self, request: HttpRequest, reply: Reply) {
        let result = (self.responder)(&request);
        self.log.borrow_mut().push(request);
        reply(result);
    }
}
