use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use rebind_dns_application::ResolveAddressUseCase;
use rebind_dns_domain::RebindConfig;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct RebindRequestHandler {
    resolve: Arc<ResolveAddressUseCase>,
    zone: RebindConfig,
}

impl RebindRequestHandler {
    pub fn new(resolve: Arc<ResolveAddressUseCase>, zone: RebindConfig) -> Self {
        Self { resolve, zone }
    }
}

#[async_trait::async_trait]
impl RequestHandler for RebindRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let name = query.name().to_utf8();
        let record_type = query.query_type();
        let client_ip = request.src().ip();

        debug!(name = %name, record_type = ?record_type, client = %client_ip, "DNS query received");

        if !self.zone.serves(&name) {
            warn!(name = %name, zone = %self.zone.domain, "Query outside served zone");
            return send_error_response(request, &mut response_handle, ResponseCode::Refused)
                .await;
        }

        // Only address resolution is modeled; every other record type gets an
        // empty authoritative answer.
        if record_type != RecordType::A {
            debug!(name = %name, record_type = ?record_type, "Non-A query, answering empty");
            return send_empty_response(request, &mut response_handle).await;
        }

        let answer = self.resolve.execute(&name).await;

        // Zero ttl so clients re-query every time; rebinding depends on the
        // answer being free to change between queries.
        let answers = vec![Record::from_rdata(
            Name::from_str(&name).unwrap_or_else(|_| Name::root()),
            0,
            RData::A(hickory_proto::rr::rdata::A(answer)),
        )];

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_authoritative(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_empty_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_authoritative(true);
    let response = builder.build(header, &[], &[] as &[Record], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send empty response");
            ResponseInfo::from(*request.header())
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
