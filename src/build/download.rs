use crate::error::Result;
use log::{debug, info};
use reqwest::Client;
use std::{fs, time::Duration};

/// 判断来源是否为网络地址
pub fn is_remote(source: &str) -> bool {
    ["https://", "http://"].iter().any(|p| source.starts_with(p))
}

// 获取源配置的原始字节：网络地址走 HTTP GET，否则按本地文件读取
pub async fn fetch_source(source: &str, timeout: Duration) -> Result<Vec<u8>> {
    if !is_remote(source) {
        info!("读取本地配置: {}", source);
        return Ok(fs::read(source)?);
    }

    info!("下载远程配置: {}", source);
    let client = Client::builder().timeout(timeout).build()?;
    let res = client.get(source).send().await?.error_for_status()?;
    let bytes = res.bytes().await?;
    debug!("下载完成，共 {} bytes", bytes.len());

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    // 单次应答的本地 HTTP 服务，返回访问地址
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: text/plain; charset=utf-8\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/clash.yaml", addr)
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://raw.githubusercontent.com/a.yaml"));
        assert!(is_remote("http://127.0.0.1/a.yaml"));
        assert!(!is_remote("config/clash.yaml"));
        assert!(!is_remote("/tmp/https://x"));
    }

    #[tokio::test]
    async fn test_fetch_source_http_ok() {
        let url = serve_once("200 OK", "proxy-groups: []\n").await;
        let bytes = fetch_source(&url, Duration::from_secs(5)).await.unwrap();
        assert_eq!(bytes, b"proxy-groups: []\n");
    }

    #[tokio::test]
    async fn test_fetch_source_http_error_status() {
        let url = serve_once("404 Not Found", "missing").await;
        let err = fetch_source(&url, Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_source_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("rule-providers: {}\n".as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let bytes = fetch_source(&path, Duration::from_secs(5)).await.unwrap();
        assert_eq!(bytes, b"rule-providers: {}\n");
    }

    #[tokio::test]
    async fn test_fetch_source_missing_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = fetch_source(path.to_str().unwrap(), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
