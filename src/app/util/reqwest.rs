use bytes::Bytes;

pub async fn get_bytes(url: &str, client: &reqwest::Client) -> Result<Bytes, reqwest::Error> {
    match client.get(url).send().await {
        Ok(res) => match res.error_for_status() {
            Ok(res) => match res.bytes().await {
                Ok(bytes) => Ok(bytes),
                Err(e) => {
                    tracing::debug!(%e, url, "failed to read response body");
                    Err(e)
                }
            },
            Err(e) => {
                tracing::debug!(%e, url, "unexpected response status");
                Err(e)
            }
        },
        Err(e) => {
            tracing::debug!(%e, url, "failed to get url response");
            Err(e)
        }
    }
}
