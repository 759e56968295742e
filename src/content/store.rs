#[derive(Debug, Clone, Copy)]
pub struct StoreLocation {
    pub name: &'static str,
    pub address_lines: &'static [&'static str],
    pub phone: &'static str,
    pub hours: &'static [&'static str],
    pub map_embed_url: &'static str,
}

pub const STORE_LOCATION: StoreLocation = StoreLocation {
    name: "Joyería Brillante",
    address_lines: &[
        "Av. Insurgentes Sur 1235, Local 4",
        "Col. Del Valle, Benito Juárez",
        "03100 Ciudad de México, CDMX",
    ],
    phone: "+52 55 1234 5678",
    hours: &[
        "Lunes a viernes: 10:00 a 19:00",
        "Sábado: 10:00 a 15:00",
        "Domingo: cerrado",
    ],
    map_embed_url: "https://www.google.com/maps?q=Av.+Insurgentes+Sur+1235,+Ciudad+de+M%C3%A9xico&output=embed",
};
