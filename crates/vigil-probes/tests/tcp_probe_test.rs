use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use vigil_core::models::{HealthStatus, Tier};
use vigil_core::traits::{IProbe, ProbeContext};
use vigil_probes::{HttpProbe, TcpProbe};

fn ctx() -> ProbeContext {
    ProbeContext::new(Duration::from_secs(2))
}

#[tokio::test]
async fn tcp_probe_reports_healthy_for_listening_socket() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = listener.accept().await;
    });

    let probe = TcpProbe::new("db", Tier::Critical, addr.to_string());
    let result = probe.run(&ctx()).await;
    assert_eq!(result.status, HealthStatus::Healthy);
    assert!(result.details.contains_key("connect_ms"));
}

#[tokio::test]
async fn tcp_probe_reports_unhealthy_for_closed_port() {
    // Bind then drop to find a port that is very likely closed.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let probe = TcpProbe::new("db", Tier::Critical, addr.to_string());
    let result = probe.run(&ctx()).await;
    assert_eq!(result.status, HealthStatus::Unhealthy);
    assert!(result.message.as_deref().unwrap().contains("failed"));
}

async fn serve_one_response(response: &'static str) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    addr
}

#[tokio::test]
async fn http_probe_reports_healthy_on_2xx() {
    let addr = serve_one_response("HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n").await;
    let probe = HttpProbe::new("api", Tier::Standard, format!("http://{addr}/"));
    let result = probe.run(&ctx()).await;
    assert_eq!(result.status, HealthStatus::Healthy);
    assert_eq!(result.details["status_code"], 200);
}

#[tokio::test]
async fn http_probe_reports_degraded_on_server_error() {
    let addr =
        serve_one_response("HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n").await;
    let probe = HttpProbe::new("api", Tier::Standard, format!("http://{addr}/"));
    let result = probe.run(&ctx()).await;
    assert_eq!(result.status, HealthStatus::Degraded);
    assert_eq!(result.details["status_code"], 500);
}

#[tokio::test]
async fn http_probe_reports_unhealthy_when_unreachable() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let probe = HttpProbe::new("api", Tier::Standard, format!("http://{addr}/"));
    let result = probe.run(&ctx()).await;
    assert_eq!(result.status, HealthStatus::Unhealthy);
}
