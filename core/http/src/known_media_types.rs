macro_rules! known_media_types {
    ($cont:ident) => ($cont! {
        Plain (txt): "text/plain; charset=utf-8",
        HTML (html, htm): "text/html; charset=utf-8",
        CSS (css): "text/css; charset=utf-8",
        JavaScript (js): "text/javascript",
        JSON (json): "application/json",
        CSV (csv): "text/csv; charset=utf-8",
        XML (xml): "text/xml; charset=utf-8",
        Markdown (md, markdown): "text/markdown; charset=utf-8",
        PDF (pdf): "application/pdf",
        Binary (bin): "application/octet-stream",
        ZIP (zip): "application/zip",
        GZIP (gz): "application/gzip",
        TAR (tar): "application/x-tar",
        WASM (wasm): "application/wasm",
        PNG (png): "image/png",
        JPEG (jpg, jpeg): "image/jpeg",
        GIF (gif): "image/gif",
        SVG (svg): "image/svg+xml",
        WEBP (webp): "image/webp",
        Icon (ico): "image/x-icon",
        MP3 (mp3): "audio/mpeg",
        MP4 (mp4): "video/mp4",
        WEBM (webm): "video/webm",
        WOFF (woff): "font/woff",
        WOFF2 (woff2): "font/woff2",
    })
}
