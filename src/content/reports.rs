use serde::Serialize;

/// One tile on the admin reports dashboard.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReportDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const REPORTS: &[ReportDescriptor] = &[
    ReportDescriptor {
        id: "ventas",
        title: "Reporte de ventas",
        description: "Ventas por período, producto y método de pago.",
        icon: "💰",
    },
    ReportDescriptor {
        id: "inventario",
        title: "Reporte de inventario",
        description: "Existencias actuales y productos con bajo stock.",
        icon: "💎",
    },
    ReportDescriptor {
        id: "clientes",
        title: "Reporte de clientes",
        description: "Clientes registrados, activos y frecuencia de compra.",
        icon: "👥",
    },
    ReportDescriptor {
        id: "pedidos",
        title: "Reporte de pedidos",
        description: "Pedidos por estado: pendientes, enviados y entregados.",
        icon: "📦",
    },
    ReportDescriptor {
        id: "seguridad",
        title: "Reporte de seguridad",
        description: "Intentos de acceso fallidos y cuentas bloqueadas.",
        icon: "🔒",
    },
];
